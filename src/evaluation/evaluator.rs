//! Trip evaluator that recomputes cost and load and checks a split result.

use crate::distance::DistanceMatrix;
use crate::models::{NodeId, SplitResult, Task, TaskId};

const COST_TOLERANCE: f64 = 1e-9;

/// A type of inconsistency found in a split result.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Trip load exceeds vehicle capacity.
    CapacityExceeded {
        /// Trip index in the result.
        trip_index: usize,
        /// Load carried by the trip.
        load: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// Trip serves no task.
    EmptyTrip {
        /// Trip index in the result.
        trip_index: usize,
    },
    /// Reported trip cost differs from the recomputed one.
    TripCostMismatch {
        /// Trip index in the result.
        trip_index: usize,
        /// Cost stored in the trip.
        reported: f64,
        /// Cost recomputed from distances.
        recomputed: f64,
    },
    /// Reported total differs from the sum of trip costs.
    TotalCostMismatch {
        /// Total stored in the result.
        reported: f64,
        /// Sum of trip costs.
        recomputed: f64,
    },
    /// Served tasks don't reproduce the giant tour.
    TaskMismatch {
        /// First position where the sequences differ.
        position: usize,
        /// Task expected from the giant tour, if any.
        expected: Option<TaskId>,
        /// Task found in the trips, if any.
        found: Option<TaskId>,
    },
}

/// A problem detected in a split result.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Evaluates trips from scratch: travel cost depot to depot, collected load,
/// and consistency of a whole [`SplitResult`] with its giant tour.
///
/// # Examples
///
/// ```
/// use u_carp::distance::DistanceMatrix;
/// use u_carp::evaluation::TripEvaluator;
/// use u_carp::models::Task;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 4.0, 0.0]).unwrap();
/// let t = Task::new(0, 1, 1, 2.0, 5.0).unwrap();
///
/// let evaluator = TripEvaluator::new(&dm, 0, 10.0);
/// assert_eq!(evaluator.trip_cost(&[&t]), 9.0); // 3 + 2 + 4
/// assert_eq!(evaluator.trip_load(&[&t, &t]), 10.0);
/// ```
pub struct TripEvaluator<'a> {
    distances: &'a DistanceMatrix,
    depot: NodeId,
    capacity: f64,
}

impl<'a> TripEvaluator<'a> {
    /// Creates a new evaluator.
    pub fn new(distances: &'a DistanceMatrix, depot: NodeId, capacity: f64) -> Self {
        Self {
            distances,
            depot,
            capacity,
        }
    }

    /// Cost of serving `tasks` in order in one trip from and back to the depot.
    ///
    /// Zero for an empty trip.
    ///
    /// # Panics
    ///
    /// Panics if a task node or the depot lies outside the distance matrix.
    pub fn trip_cost(&self, tasks: &[&Task]) -> f64 {
        let Some((first, rest)) = tasks.split_first() else {
            return 0.0;
        };
        let mut cost = self.distances.get(self.depot, first.source()) + first.cost();
        let mut position = first.target();
        for task in rest {
            cost += self.distances.get(position, task.source());
            cost += task.cost();
            position = task.target();
        }
        cost + self.distances.get(position, self.depot)
    }

    /// Total demand of `tasks`.
    pub fn trip_load(&self, tasks: &[&Task]) -> f64 {
        tasks.iter().map(|t| t.demand()).sum()
    }

    /// Returns `true` if `tasks` fit in one vehicle.
    pub fn is_feasible(&self, tasks: &[&Task]) -> bool {
        self.trip_load(tasks) <= self.capacity
    }

    /// Checks `result` against the giant tour it was split from.
    ///
    /// A result produced by [`split`](crate::split::split) yields no
    /// violations.
    pub fn check(&self, tour: &[&Task], result: &SplitResult<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut total = 0.0;

        for (trip_index, trip) in result.trips().iter().enumerate() {
            if trip.is_empty() {
                violations.push(Violation::new(ViolationType::EmptyTrip { trip_index }));
            }

            let load = self.trip_load(trip.tasks());
            if load > self.capacity {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    trip_index,
                    load,
                    capacity: self.capacity,
                }));
            }

            let recomputed = self.trip_cost(trip.tasks());
            if !costs_match(trip.cost(), recomputed) {
                violations.push(Violation::new(ViolationType::TripCostMismatch {
                    trip_index,
                    reported: trip.cost(),
                    recomputed,
                }));
            }
            total += trip.cost();
        }

        if !costs_match(result.total_cost(), total) {
            violations.push(Violation::new(ViolationType::TotalCostMismatch {
                reported: result.total_cost(),
                recomputed: total,
            }));
        }

        let mut expected = tour.iter().map(|t| t.id());
        let mut found = result.tasks().map(|t| t.id());
        let mut position = 0;
        loop {
            match (expected.next(), found.next()) {
                (None, None) => break,
                (e, f) if e == f => position += 1,
                (e, f) => {
                    violations.push(Violation::new(ViolationType::TaskMismatch {
                        position,
                        expected: e,
                        found: f,
                    }));
                    break;
                }
            }
        }

        violations
    }
}

fn costs_match(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= COST_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
