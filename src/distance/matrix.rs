//! Dense all-pairs distance matrix.

use std::time::Instant;

use log::debug;

use super::dijkstra::shortest_paths_from;
use crate::error::Result;
use crate::models::{Network, NodeId};

/// A dense n×n shortest-path cost matrix stored in row-major order.
///
/// `get(a, b)` is the cheapest travel cost from `a` to `b`; the diagonal is
/// zero and unreachable pairs are `f64::INFINITY`. Costs may be asymmetric.
/// The matrix is immutable once built and can be shared across threads.
///
/// # Examples
///
/// ```
/// use u_carp::models::Network;
/// use u_carp::distance::DistanceMatrix;
///
/// let mut net = Network::new(3);
/// net.add_arc(0, 1, 4.0).unwrap();
/// net.add_arc(1, 2, 1.0).unwrap();
/// net.add_arc(2, 0, 2.0).unwrap();
///
/// let dm = DistanceMatrix::from_network(&net).unwrap();
/// assert_eq!(dm.get(0, 2), 5.0);
/// assert_eq!(dm.get(2, 1), 6.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Runs Dijkstra from every node of `network`.
    pub fn from_network(network: &Network) -> Result<Self> {
        let start = Instant::now();
        let size = network.num_nodes();
        let mut data = Vec::with_capacity(size * size);
        for source in 0..size {
            data.extend(shortest_paths_from(network, source)?);
        }
        debug!(
            "distance matrix: {} nodes, {} arcs, built in {:?}",
            size,
            network.num_arcs(),
            start.elapsed()
        );
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the shortest-path cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: NodeId, to: NodeId) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `node` has a row and column in this matrix.
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.size
    }

    /// Returns `true` if `to` can be reached from `from`.
    pub fn is_reachable(&self, from: NodeId, to: NodeId) -> bool {
        self.get(from, to).is_finite()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_nan() || b.is_nan() {
                    return false;
                }
            }
        }
        true
    }
}
