//! Giant tour: an unconstrained ordering of service tasks.
//!
//! A giant tour encodes a CARP solution as a single sequence of all tasks,
//! ignoring capacity. The [`split`](crate::split::split) procedure cuts it
//! into depot trips.

use std::collections::HashSet;

use super::{Task, TaskId};
use crate::error::{CarpError, Result};

/// An ordered sequence of borrowed tasks with no task repeated.
///
/// Tasks are owned by the instance; the tour only references them.
///
/// # Examples
///
/// ```
/// use u_carp::models::{GiantTour, Task};
///
/// let a = Task::new(0, 0, 1, 1.0, 1.0).unwrap();
/// let b = Task::new(1, 1, 2, 1.0, 1.0).unwrap();
///
/// let mut tour = GiantTour::new();
/// tour.push(&b).unwrap();
/// tour.push(&a).unwrap();
/// assert!(tour.push(&a).is_err());
/// assert_eq!(tour.len(), 2);
/// assert_eq!(tour.tasks()[0].id(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GiantTour<'a> {
    tasks: Vec<&'a Task>,
    seen: HashSet<TaskId>,
}

impl<'a> GiantTour<'a> {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Builds a tour from tasks in the given order.
    ///
    /// Fails on the first task id seen twice.
    pub fn from_tasks<I>(tasks: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut tour = Self::new();
        for task in tasks {
            tour.push(task)?;
        }
        Ok(tour)
    }

    /// Appends a task to the end of the tour.
    pub fn push(&mut self, task: &'a Task) -> Result<()> {
        if !self.seen.insert(task.id()) {
            return Err(CarpError::DuplicateTask { task: task.id() });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Tasks in tour order.
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Swaps the tasks at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.tasks.swap(a, b);
    }

    /// Number of tasks in this tour.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the tour has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
