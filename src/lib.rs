//! # u-carp
//!
//! Capacitated Arc Routing Problem (CARP) evaluation: splits a giant tour of
//! service tasks into the minimum-cost sequence of capacity-feasible trips,
//! each leaving from and returning to the depot.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Task, Network, GiantTour, Trip, SplitResult, SplitConfig)
//! - [`distance`] — All-pairs shortest-path distance matrix
//! - [`split`] — Segment cost matrix, split optimizer and tour reconstruction
//! - [`evaluation`] — Independent trip evaluation and feasibility checking
//! - [`problem`] — Immutable problem facade shared across evaluations
//! - [`instance`] — Instance file loader
//!
//! ## Example
//!
//! ```
//! use u_carp::models::{Network, SplitConfig, Task};
//! use u_carp::problem::CarpProblem;
//!
//! let mut network = Network::new(3);
//! network.add_edge(0, 1, 2.0).unwrap();
//! network.add_edge(1, 2, 3.0).unwrap();
//!
//! let tasks = vec![
//!     Task::new(0, 0, 1, 2.0, 4.0).unwrap(),
//!     Task::new(1, 1, 2, 3.0, 4.0).unwrap(),
//! ];
//! let config = SplitConfig::new().with_capacity(10.0).with_depot(0);
//! let problem = CarpProblem::new(network, &config).unwrap();
//!
//! let tour: Vec<&Task> = tasks.iter().collect();
//! let result = problem.split(&tour).unwrap();
//! assert_eq!(result.trips().len(), 1);
//! // 0→1 (serve) 1→2 (serve) 2→1→0 back = 2 + 3 + 5
//! assert!((result.total_cost() - 10.0).abs() < 1e-10);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instance;
pub mod models;
pub mod problem;
pub mod split;

pub use error::{CarpError, Result};
