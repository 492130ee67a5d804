//! Trip cost of every contiguous segment of a giant tour.

use log::trace;

use crate::distance::DistanceMatrix;
use crate::error::{CarpError, Result};
use crate::models::{NodeId, Task};

/// Cost of serving tasks `i..j` of a giant tour in one depot-to-depot trip,
/// for every pair of cut points `0 <= i < j <= n`.
///
/// Entries whose summed demand exceeds capacity are `f64::INFINITY`, as are
/// trips that need an unreachable leg. Only the upper triangle is stored,
/// packed row by row.
///
/// # Examples
///
/// ```
/// use u_carp::distance::DistanceMatrix;
/// use u_carp::models::Task;
/// use u_carp::split::SegmentCostMatrix;
///
/// // depot 0, task nodes 1 and 2, all legs cost 1
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 1.0,
///     1.0, 0.0, 1.0,
///     1.0, 1.0, 0.0,
/// ]).unwrap();
/// let a = Task::new(0, 1, 2, 5.0, 3.0).unwrap();
/// let b = Task::new(1, 2, 1, 5.0, 3.0).unwrap();
///
/// let seg = SegmentCostMatrix::build(&[&a, &b], &dm, 0, 4.0).unwrap();
/// assert_eq!(seg.get(0, 1), 7.0); // 1 + 5 + 1
/// assert_eq!(seg.get(1, 2), 7.0);
/// assert!(!seg.is_feasible(0, 2)); // demand 6 > 4
/// ```
#[derive(Debug, Clone)]
pub struct SegmentCostMatrix {
    num_tasks: usize,
    costs: Vec<f64>,
}

impl SegmentCostMatrix {
    /// Computes every segment cost for `tour`.
    ///
    /// For a fixed start `i`, demand and cost are accumulated left to right
    /// while the end grows, so the whole matrix is built in O(n²). Fails only
    /// on malformed input: a depot or task node outside `distances`.
    pub fn build(
        tour: &[&Task],
        distances: &DistanceMatrix,
        depot: NodeId,
        capacity: f64,
    ) -> Result<Self> {
        check_node(distances, depot)?;
        for task in tour {
            check_node(distances, task.source())?;
            check_node(distances, task.target())?;
        }

        let n = tour.len();
        let mut matrix = Self {
            num_tasks: n,
            costs: vec![f64::INFINITY; n * (n + 1) / 2],
        };

        let mut feasible = 0usize;
        for i in 0..n {
            let first = tour[i];
            let mut load = 0.0;
            // Cost from the depot up to the end of the last served task.
            let mut open = distances.get(depot, first.source()) + first.cost();
            let mut last = first;

            for j in (i + 1)..=n {
                let task = tour[j - 1];
                load += task.demand();
                // Demands are non-negative: every longer segment is too heavy.
                if load > capacity {
                    break;
                }
                if j > i + 1 {
                    open += distances.get(last.target(), task.source());
                    open += task.cost();
                }
                last = task;

                let cost = open + distances.get(task.target(), depot);
                let idx = matrix.index(i, j);
                matrix.costs[idx] = cost;
                if cost.is_finite() {
                    feasible += 1;
                }
            }
        }

        trace!(
            "segment matrix: {} tasks, {} of {} segments feasible",
            n,
            feasible,
            matrix.costs.len()
        );
        Ok(matrix)
    }

    /// Number of tasks `n`; cut points run from `0` to `n`.
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Cost of the trip serving tasks `i..j`, or `f64::INFINITY` if infeasible.
    ///
    /// # Panics
    ///
    /// Panics unless `i < j <= num_tasks()`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < j && j <= self.num_tasks,
            "segment ({i}, {j}) outside cut points 0..={}",
            self.num_tasks
        );
        self.costs[self.index(i, j)]
    }

    /// Returns `true` if tasks `i..j` fit in one trip.
    pub fn is_feasible(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_finite()
    }

    // Row i holds j = i+1..=n and starts after n + (n-1) + ... + (n-i+1) entries.
    fn index(&self, i: usize, j: usize) -> usize {
        let n = self.num_tasks;
        i * n - i * i.saturating_sub(1) / 2 + (j - i - 1)
    }

    #[cfg(test)]
    pub(crate) fn from_fn(num_tasks: usize, cost: impl Fn(usize, usize) -> f64) -> Self {
        let mut matrix = Self {
            num_tasks,
            costs: vec![f64::INFINITY; num_tasks * (num_tasks + 1) / 2],
        };
        for i in 0..num_tasks {
            for j in (i + 1)..=num_tasks {
                let idx = matrix.index(i, j);
                matrix.costs[idx] = cost(i, j);
            }
        }
        matrix
    }
}

fn check_node(distances: &DistanceMatrix, node: NodeId) -> Result<()> {
    if distances.contains(node) {
        Ok(())
    } else {
        Err(CarpError::UnknownNode {
            node,
            num_nodes: distances.size(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line 0 - 1 - 2 - 3 with unit two-way legs; depot at 0.
    fn line_distances() -> DistanceMatrix {
        let mut data = vec![0.0; 16];
        for a in 0..4usize {
            for b in 0..4usize {
                data[a * 4 + b] = (a as f64 - b as f64).abs();
            }
        }
        DistanceMatrix::from_data(4, data).expect("4x4")
    }

    fn line_tasks() -> Vec<Task> {
        vec![
            Task::new(0, 0, 1, 1.0, 2.0).expect("valid"),
            Task::new(1, 1, 2, 1.0, 3.0).expect("valid"),
            Task::new(2, 2, 3, 1.0, 4.0).expect("valid"),
        ]
    }

    fn naive_cost(tour: &[&Task], dm: &DistanceMatrix, depot: NodeId) -> f64 {
        let mut cost = dm.get(depot, tour[0].source()) + tour[0].cost();
        for pair in tour.windows(2) {
            cost += dm.get(pair[0].target(), pair[1].source());
            cost += pair[1].cost();
        }
        cost + dm.get(tour[tour.len() - 1].target(), depot)
    }

    #[test]
    fn test_single_task_segments() {
        let dm = line_distances();
        let ts = line_tasks();
        let tour: Vec<&Task> = ts.iter().collect();
        let seg = SegmentCostMatrix::build(&tour, &dm, 0, 100.0).expect("valid");
        // 0→0 serve 0→1, back 1→0
        assert_eq!(seg.get(0, 1), 2.0);
        // 0→1 serve 1→2, back 2→0
        assert_eq!(seg.get(1, 2), 4.0);
        // 0→2 serve 2→3, back 3→0
        assert_eq!(seg.get(2, 3), 6.0);
    }

    #[test]
    fn test_multi_task_segment_matches_naive() {
        let dm = line_distances();
        let ts = line_tasks();
        let tour: Vec<&Task> = ts.iter().collect();
        let seg = SegmentCostMatrix::build(&tour, &dm, 0, 100.0).expect("valid");
        for i in 0..3 {
            for j in (i + 1)..=3 {
                assert_eq!(seg.get(i, j), naive_cost(&tour[i..j], &dm, 0));
            }
        }
        // whole line: 0 + 1 + 0 + 1 + 0 + 1 + 3
        assert_eq!(seg.get(0, 3), 6.0);
    }

    #[test]
    fn test_capacity_prunes_segments() {
        let dm = line_distances();
        let ts = line_tasks();
        let tour: Vec<&Task> = ts.iter().collect();
        // demands 2, 3, 4
        let seg = SegmentCostMatrix::build(&tour, &dm, 0, 5.0).expect("valid");
        assert!(seg.is_feasible(0, 2)); // 5 <= 5
        assert!(!seg.is_feasible(1, 3)); // 7 > 5
        assert!(!seg.is_feasible(0, 3)); // 9 > 5
        assert!(seg.is_feasible(2, 3));
    }

    #[test]
    fn test_oversized_task_blocks_its_segments() {
        let dm = line_distances();
        let ts = line_tasks();
        let tour: Vec<&Task> = ts.iter().collect();
        let seg = SegmentCostMatrix::build(&tour, &dm, 0, 3.5).expect("valid");
        assert!(seg.is_feasible(0, 1));
        assert!(seg.is_feasible(1, 2));
        assert!(!seg.is_feasible(2, 3));
        assert_eq!(seg.get(2, 3), f64::INFINITY);
    }

    #[test]
    fn test_unreachable_leg_is_infinite() {
        let inf = f64::INFINITY;
        // node 2 cannot reach the depot
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0.0, 1.0, 1.0, //
                1.0, 0.0, 1.0, //
                inf, inf, 0.0,
            ],
        )
        .expect("3x3");
        let a = Task::new(0, 0, 2, 1.0, 1.0).expect("valid");
        let b = Task::new(1, 2, 1, 1.0, 1.0).expect("valid");
        let seg = SegmentCostMatrix::build(&[&a, &b], &dm, 0, 10.0).expect("valid");
        assert!(!seg.is_feasible(0, 1)); // ends at 2, no way home
        assert!(seg.is_feasible(0, 2)); // 0 + 1 + 0 + 1 + 1
        assert_eq!(seg.get(0, 2), 3.0);
    }

    #[test]
    fn test_unknown_task_node() {
        let dm = line_distances();
        let t = Task::new(0, 0, 9, 1.0, 1.0).expect("valid");
        assert!(matches!(
            SegmentCostMatrix::build(&[&t], &dm, 0, 10.0),
            Err(CarpError::UnknownNode { node: 9, .. })
        ));
    }

    #[test]
    fn test_unknown_depot() {
        let dm = line_distances();
        assert!(matches!(
            SegmentCostMatrix::build(&[], &dm, 4, 10.0),
            Err(CarpError::UnknownNode { node: 4, .. })
        ));
    }

    #[test]
    fn test_empty_tour() {
        let dm = line_distances();
        let seg = SegmentCostMatrix::build(&[], &dm, 0, 10.0).expect("valid");
        assert_eq!(seg.num_tasks(), 0);
    }

    #[test]
    fn test_packed_index_layout() {
        let seg = SegmentCostMatrix::from_fn(4, |i, j| (10 * i + j) as f64);
        for i in 0..4 {
            for j in (i + 1)..=4 {
                assert_eq!(seg.get(i, j), (10 * i + j) as f64);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_get_rejects_empty_segment() {
        let seg = SegmentCostMatrix::from_fn(2, |_, _| 1.0);
        seg.get(1, 1);
    }
}
