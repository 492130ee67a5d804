//! Shortest-path distances between network nodes.
//!
//! Provides a dense all-pairs distance matrix built by running Dijkstra
//! once per source node. Built once per network and read-only afterwards.

mod dijkstra;
mod matrix;

pub use dijkstra::shortest_paths_from;
pub use matrix::DistanceMatrix;
