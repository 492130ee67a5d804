//! Domain model types for capacitated arc routing.
//!
//! Provides the core abstractions: a directed network with non-negative arc
//! costs, service tasks with demands, giant tours as ordered task
//! sequences, depot trips and the split result, plus the capacity/depot
//! configuration that ties them together.

mod config;
mod network;
mod task;
mod tour;
mod trip;

pub use config::{SplitConfig, CONDITION_CAPACITY, CONDITION_DEPOT};
pub use network::{Arc, Network};
pub use task::{NodeId, Task, TaskId};
pub use tour::GiantTour;
pub use trip::{SplitResult, Trip};
