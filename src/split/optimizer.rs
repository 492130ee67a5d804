//! Shortest path over the cut-point graph.
//!
//! Cut points `0..=n` are the nodes of an implicit DAG; every finite
//! segment cost `seg(i, j)` is an edge `i → j`. The cheapest path from `0`
//! to `n` is the optimal split. Cut points are settled in increasing order
//! of their best known cost (Dijkstra), which is valid because segment
//! costs are non-negative.

use log::trace;

use super::SegmentCostMatrix;
use crate::error::{CarpError, Result};

/// Best costs and predecessors of every cut point.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPaths {
    best: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl CutPaths {
    /// Minimum cost to cover tasks `0..k`, for each cut point `k`.
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// Cut point preceding `k` on its best path; `None` for cut point 0.
    pub fn pred(&self) -> &[Option<usize>] {
        &self.pred
    }

    /// Cost of covering the whole tour.
    pub fn total_cost(&self) -> f64 {
        self.best[self.best.len() - 1]
    }

    /// Index of the final cut point (the number of tasks).
    pub fn last_cut_point(&self) -> usize {
        self.best.len() - 1
    }
}

/// Finds the cheapest chain of feasible segments covering a giant tour.
///
/// # Examples
///
/// ```
/// use u_carp::distance::DistanceMatrix;
/// use u_carp::models::Task;
/// use u_carp::split::{SegmentCostMatrix, SplitOptimizer};
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
/// let a = Task::new(0, 1, 1, 1.0, 2.0).unwrap();
/// let b = Task::new(1, 1, 1, 1.0, 2.0).unwrap();
/// let seg = SegmentCostMatrix::build(&[&a, &b], &dm, 0, 4.0).unwrap();
///
/// let paths = SplitOptimizer::new(&seg).solve().unwrap();
/// assert_eq!(paths.total_cost(), 4.0); // one trip: 1 + 1 + 0 + 1 + 1
/// assert_eq!(paths.pred()[2], Some(0));
/// ```
pub struct SplitOptimizer<'m> {
    segments: &'m SegmentCostMatrix,
}

impl<'m> SplitOptimizer<'m> {
    /// Creates an optimizer over the given segment costs.
    pub fn new(segments: &'m SegmentCostMatrix) -> Self {
        Self { segments }
    }

    /// Computes best costs and predecessors for all cut points.
    ///
    /// Among unsettled cut points the one with the smallest best cost is
    /// settled next, the lowest index winning ties. A cost is only replaced
    /// by a strictly smaller one, so ties keep the earlier predecessor.
    ///
    /// Fails with [`CarpError::Unreachable`] naming the first cut point
    /// that no chain of feasible segments reaches, if the last one is among
    /// them.
    pub fn solve(&self) -> Result<CutPaths> {
        let n = self.segments.num_tasks();
        let mut best = vec![f64::INFINITY; n + 1];
        let mut pred = vec![None; n + 1];
        let mut settled = vec![false; n + 1];

        best[0] = 0.0;
        settled[0] = true;
        for j in 1..=n {
            let cost = self.segments.get(0, j);
            if cost.is_finite() {
                best[j] = cost;
                pred[j] = Some(0);
            }
        }

        while let Some(k) = next_unsettled(&best, &settled) {
            settled[k] = true;
            for j in (k + 1)..=n {
                let cost = self.segments.get(k, j);
                if !cost.is_finite() {
                    continue;
                }
                let candidate = best[k] + cost;
                if candidate < best[j] {
                    best[j] = candidate;
                    pred[j] = Some(k);
                }
            }
        }

        if !best[n].is_finite() {
            let cut_point = best.iter().position(|b| !b.is_finite()).unwrap_or(n);
            trace!("cut point {cut_point} of {n} unreachable");
            return Err(CarpError::Unreachable { cut_point });
        }

        Ok(CutPaths { best, pred })
    }
}

/// Unsettled cut point with the smallest finite best cost, lowest index first.
fn next_unsettled(best: &[f64], settled: &[bool]) -> Option<usize> {
    let mut next: Option<usize> = None;
    for (k, &cost) in best.iter().enumerate() {
        if settled[k] || !cost.is_finite() {
            continue;
        }
        match next {
            Some(m) if best[m] <= cost => {}
            _ => next = Some(k),
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn chain(paths: &CutPaths) -> Vec<usize> {
        let mut cuts = vec![paths.last_cut_point()];
        let mut k = paths.last_cut_point();
        while let Some(p) = paths.pred()[k] {
            cuts.push(p);
            k = p;
        }
        cuts.reverse();
        cuts
    }

    #[test]
    fn test_empty_tour() {
        let seg = SegmentCostMatrix::from_fn(0, |_, _| INF);
        let paths = SplitOptimizer::new(&seg).solve().expect("trivially feasible");
        assert_eq!(paths.best(), &[0.0]);
        assert_eq!(paths.pred(), &[None]);
        assert_eq!(paths.total_cost(), 0.0);
    }

    #[test]
    fn test_picks_cheapest_chain() {
        // seg(0,1)=10 seg(1,2)=12 seg(2,3)=11 seg(0,2)=14, rest infeasible
        let seg = SegmentCostMatrix::from_fn(3, |i, j| match (i, j) {
            (0, 1) => 10.0,
            (1, 2) => 12.0,
            (2, 3) => 11.0,
            (0, 2) => 14.0,
            _ => INF,
        });
        let paths = SplitOptimizer::new(&seg).solve().expect("feasible");
        assert_eq!(paths.total_cost(), 25.0);
        assert_eq!(chain(&paths), vec![0, 2, 3]);
        assert_eq!(paths.best(), &[0.0, 10.0, 14.0, 25.0]);
    }

    #[test]
    fn test_equal_cost_keeps_earlier_predecessor() {
        // 0→2 directly costs 22, as does 0→1→2
        let seg = SegmentCostMatrix::from_fn(3, |i, j| match (i, j) {
            (0, 1) => 10.0,
            (1, 2) => 12.0,
            (2, 3) => 11.0,
            (0, 2) => 22.0,
            _ => INF,
        });
        let paths = SplitOptimizer::new(&seg).solve().expect("feasible");
        assert_eq!(paths.pred()[2], Some(0));
        assert_eq!(chain(&paths), vec![0, 2, 3]);
        assert_eq!(paths.total_cost(), 33.0);
    }

    #[test]
    fn test_selection_tie_prefers_lowest_index() {
        // cut points 1 and 2 both cost 5; both reach 3 for 4 more
        let seg = SegmentCostMatrix::from_fn(3, |i, j| match (i, j) {
            (0, 1) | (0, 2) => 5.0,
            (1, 2) => 1.0,
            (1, 3) | (2, 3) => 4.0,
            _ => INF,
        });
        let paths = SplitOptimizer::new(&seg).solve().expect("feasible");
        assert_eq!(paths.pred()[3], Some(1));
        assert_eq!(paths.total_cost(), 9.0);
    }

    #[test]
    fn test_later_cheaper_cut_point_settles_first() {
        // best(2) < best(1): cut point 2 is settled before 1
        let seg = SegmentCostMatrix::from_fn(3, |i, j| match (i, j) {
            (0, 1) => 8.0,
            (0, 2) => 3.0,
            (1, 3) => 1.0,
            (2, 3) => 6.0,
            _ => INF,
        });
        let paths = SplitOptimizer::new(&seg).solve().expect("feasible");
        assert_eq!(paths.pred()[3], Some(2));
        assert_eq!(paths.total_cost(), 9.0);
    }

    #[test]
    fn test_unreachable_end() {
        // task 1 alone is infeasible, so cut points 2 and 3 are unreachable
        let seg = SegmentCostMatrix::from_fn(3, |i, j| match (i, j) {
            (0, 1) => 1.0,
            (2, 3) => 1.0,
            _ => INF,
        });
        let err = SplitOptimizer::new(&seg).solve().unwrap_err();
        assert!(matches!(err, CarpError::Unreachable { cut_point: 2 }));
    }

    #[test]
    fn test_pred_chain_strictly_decreasing() {
        let seg = SegmentCostMatrix::from_fn(6, |i, j| {
            if j - i <= 2 {
                (j * j + i) as f64
            } else {
                INF
            }
        });
        let paths = SplitOptimizer::new(&seg).solve().expect("feasible");
        for (k, p) in paths.pred().iter().enumerate().skip(1) {
            let p = p.expect("every cut point reachable");
            assert!(p < k);
        }
        assert_eq!(chain(&paths)[0], 0);
    }
}
