//! Problem facade shared by every giant-tour evaluation.
//!
//! Holds the network, its distance matrix, the depot and the vehicle
//! capacity. Everything is immutable after construction, so one problem can
//! evaluate many giant tours concurrently from several threads.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::TripEvaluator;
use crate::models::{Network, NodeId, SplitConfig, SplitResult, Task};
use crate::split::split;

/// An immutable CARP instance ready to evaluate giant tours.
///
/// # Examples
///
/// ```
/// use u_carp::models::{Network, SplitConfig, Task};
/// use u_carp::problem::CarpProblem;
///
/// let mut network = Network::new(2);
/// network.add_edge(0, 1, 3.0).unwrap();
/// let config = SplitConfig::new().with_capacity(5.0).with_depot(0);
/// let problem = CarpProblem::new(network, &config).unwrap();
///
/// let a = Task::new(0, 0, 1, 3.0, 4.0).unwrap();
/// let b = Task::new(1, 1, 0, 3.0, 4.0).unwrap();
/// // demand 8 > 5: two trips of 3 + 3 each
/// assert_eq!(problem.evaluate(&[&a, &b]).unwrap(), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct CarpProblem {
    network: Network,
    distances: DistanceMatrix,
    depot: NodeId,
    capacity: f64,
}

impl CarpProblem {
    /// Validates `config` against `network` and computes the distance matrix.
    ///
    /// Configuration errors are reported before any shortest-path work.
    pub fn new(network: Network, config: &SplitConfig) -> Result<Self> {
        let (capacity, depot) = config.resolve(&network)?;
        let distances = DistanceMatrix::from_network(&network)?;
        debug!(
            "CARP problem ready: {} nodes, depot {}, capacity {}",
            network.num_nodes(),
            depot,
            capacity
        );
        Ok(Self {
            network,
            distances,
            depot,
            capacity,
        })
    }

    /// Splits `tour` into optimal depot trips.
    pub fn split<'a>(&self, tour: &'a [&'a Task]) -> Result<SplitResult<'a>> {
        split(tour, &self.distances, self.depot, self.capacity)
    }

    /// Objective value of `tour`: the total cost of its optimal split.
    pub fn evaluate(&self, tour: &[&Task]) -> Result<f64> {
        self.split(tour).map(|result| result.total_cost())
    }

    /// Evaluator bound to this problem's distances, depot and capacity.
    pub fn evaluator(&self) -> TripEvaluator<'_> {
        TripEvaluator::new(&self.distances, self.depot, self.capacity)
    }

    /// The road network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// All-pairs shortest-path costs of the network.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Depot node.
    pub fn depot(&self) -> NodeId {
        self.depot
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}
