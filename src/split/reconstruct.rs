//! Turns a predecessor chain into depot trips.

use super::{CutPaths, SegmentCostMatrix};
use crate::error::{CarpError, Result};
use crate::models::{SplitResult, Task, Trip};

/// Rebuilds the trip list of an optimal split.
pub struct TourReconstructor<'a, 'm> {
    tour: &'a [&'a Task],
    segments: &'m SegmentCostMatrix,
}

impl<'a, 'm> TourReconstructor<'a, 'm> {
    /// Creates a reconstructor for `tour` and its segment costs.
    pub fn new(tour: &'a [&'a Task], segments: &'m SegmentCostMatrix) -> Self {
        Self { tour, segments }
    }

    /// Walks the predecessor chain back from the last cut point and emits
    /// one trip per boundary pair, in execution order.
    ///
    /// The total cost is the left-to-right sum of trip costs, which is
    /// exactly the optimizer's best cost for the last cut point.
    pub fn reconstruct(&self, paths: &CutPaths) -> Result<SplitResult<'a>> {
        let mut bounds = Vec::new();
        let mut k = paths.last_cut_point();
        while k > 0 {
            let start = paths.pred()[k].ok_or(CarpError::Unreachable { cut_point: k })?;
            bounds.push((start, k));
            k = start;
        }
        bounds.reverse();

        let mut total_cost = 0.0;
        let trips: Vec<Trip<'a>> = bounds
            .into_iter()
            .map(|(a, b)| {
                let cost = self.segments.get(a, b);
                total_cost += cost;
                Trip::new(&self.tour[a..b], cost)
            })
            .collect();
        debug_assert_eq!(total_cost, paths.total_cost());

        Ok(SplitResult::new(trips, total_cost))
    }
}
