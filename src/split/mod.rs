//! Optimal split of a giant tour into capacity-feasible depot trips.
//!
//! # Algorithm
//!
//! Given a giant tour (an ordering of all service tasks), finds the
//! minimum-cost partition into contiguous trips such that no trip carries
//! more than the vehicle capacity.
//!
//! 1. [`SegmentCostMatrix`] prices every contiguous segment `i..j` as one
//!    depot-to-depot trip, or marks it infeasible.
//! 2. [`SplitOptimizer`] runs a shortest path from cut point `0` to cut
//!    point `n` over the DAG of feasible segments.
//! 3. [`TourReconstructor`] follows the predecessor chain back into trips.
//!
//! # Complexity
//!
//! O(n²) time and memory for the segment matrix; O(n²) for the optimizer.
//!
//! # Reference
//!
//! Lacomme, P., Prins, C., Ramdane-Chérif, W. (2004). "Competitive memetic
//! algorithms for arc routing problems", *Annals of Operations Research*
//! 131, 159-185.

mod optimizer;
mod reconstruct;
mod segment;

use std::time::Instant;

use log::{debug, warn};

pub use optimizer::{CutPaths, SplitOptimizer};
pub use reconstruct::TourReconstructor;
pub use segment::SegmentCostMatrix;

use crate::distance::DistanceMatrix;
use crate::error::{CarpError, Result};
use crate::models::{NodeId, SplitResult, Task};

/// Splits a giant tour into optimal depot trips.
///
/// Every call allocates its own working arrays; `distances` is only read,
/// so one matrix can serve many concurrent calls.
///
/// # Errors
///
/// - [`CarpError::Configuration`] for a negative or non-finite capacity or
///   a depot outside the distance matrix, before any matrix work.
/// - [`CarpError::UnknownNode`] if a task references a node outside the
///   distance matrix.
/// - [`CarpError::InfeasibleSegment`] if some task alone exceeds capacity.
/// - [`CarpError::Unreachable`] if the tour can't be covered for any other
///   reason, such as a task that can't be reached from the depot.
///
/// # Examples
///
/// ```
/// use u_carp::distance::DistanceMatrix;
/// use u_carp::models::Task;
/// use u_carp::split::split;
///
/// // depot 0 and a street 1 ↔ 2, each 1 away from the depot
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 1.0,
///     1.0, 0.0, 2.0,
///     1.0, 2.0, 0.0,
/// ]).unwrap();
/// let a = Task::new(0, 1, 2, 2.0, 6.0).unwrap();
/// let b = Task::new(1, 2, 1, 2.0, 6.0).unwrap();
/// let tour = [&a, &b];
///
/// let result = split(&tour, &dm, 0, 10.0).unwrap();
/// assert_eq!(result.num_trips(), 2);
/// assert_eq!(result.total_cost(), 8.0); // (1 + 2 + 1) twice
/// ```
pub fn split<'a>(
    tour: &'a [&'a Task],
    distances: &DistanceMatrix,
    depot: NodeId,
    capacity: f64,
) -> Result<SplitResult<'a>> {
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(CarpError::configuration(format!(
            "vehicle capacity must be a non-negative number, got {capacity}"
        )));
    }
    if !distances.contains(depot) {
        return Err(CarpError::configuration(format!(
            "depot {depot} is not covered by the distance matrix ({} nodes)",
            distances.size()
        )));
    }

    let start = Instant::now();
    let segments = SegmentCostMatrix::build(tour, distances, depot, capacity)?;
    let built = start.elapsed();

    let paths = SplitOptimizer::new(&segments)
        .solve()
        .map_err(|err| explain_infeasibility(err, tour, capacity))?;
    let result = TourReconstructor::new(tour, &segments).reconstruct(&paths)?;

    debug!(
        "split {} tasks into {} trips, cost {} (segments {:?}, total {:?})",
        tour.len(),
        result.num_trips(),
        result.total_cost(),
        built,
        start.elapsed()
    );
    Ok(result)
}

/// Replaces a bare unreachable cut point by the oversized task behind it.
fn explain_infeasibility(err: CarpError, tour: &[&Task], capacity: f64) -> CarpError {
    if let Some(position) = tour.iter().position(|t| t.demand() > capacity) {
        let task = tour[position];
        warn!(
            "task {} demands {} but capacity is {}; tour cannot be split",
            task.id(),
            task.demand(),
            capacity
        );
        return CarpError::InfeasibleSegment {
            position,
            task: task.id(),
            demand: task.demand(),
            capacity,
        };
    }
    warn!("giant tour cannot be split: {err}");
    err
}
