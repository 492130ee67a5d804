//! Trip and split result types.

use std::fmt;

use serde::Serialize;

use super::Task;

/// A contiguous run of giant-tour tasks served by one vehicle, depot to depot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip<'a> {
    tasks: &'a [&'a Task],
    cost: f64,
}

impl<'a> Trip<'a> {
    pub(crate) fn new(tasks: &'a [&'a Task], cost: f64) -> Self {
        Self { tasks, cost }
    }

    /// Tasks served by this trip, in giant-tour order.
    pub fn tasks(&self) -> &'a [&'a Task] {
        self.tasks
    }

    /// Travel cost of this trip, including the legs from and to the depot.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Total demand collected on this trip.
    pub fn load(&self) -> f64 {
        self.tasks.iter().map(|t| t.demand()).sum()
    }

    /// Number of tasks in this trip (never zero for trips produced by split).
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if this trip serves no task.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Outcome of splitting a giant tour: the trips in execution order and
/// their total cost.
///
/// Concatenating the task lists of all trips yields the original giant
/// tour exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitResult<'a> {
    trips: Vec<Trip<'a>>,
    total_cost: f64,
}

impl<'a> SplitResult<'a> {
    pub(crate) fn new(trips: Vec<Trip<'a>>, total_cost: f64) -> Self {
        Self { trips, total_cost }
    }

    /// Trips in the order vehicles execute them.
    pub fn trips(&self) -> &[Trip<'a>] {
        &self.trips
    }

    /// Number of trips (vehicles used).
    pub fn num_trips(&self) -> usize {
        self.trips.len()
    }

    /// Total cost of all trips.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// All served tasks, trip after trip.
    pub fn tasks(&self) -> impl Iterator<Item = &'a Task> + '_ {
        self.trips.iter().flat_map(|trip| trip.tasks().iter().copied())
    }
}

impl fmt::Display for SplitResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} trip(s), total cost {}",
            self.trips.len(),
            self.total_cost
        )?;
        for (i, trip) in self.trips.iter().enumerate() {
            writeln!(
                f,
                "Trip {}: {} task(s), load {}, cost {}",
                i + 1,
                trip.len(),
                trip.load(),
                trip.cost()
            )?;
            for task in trip.tasks() {
                writeln!(f, "  {task}")?;
            }
        }
        Ok(())
    }
}
