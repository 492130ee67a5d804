//! Service task type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CarpError, Result};

/// Node identifier (0-based index into the network).
pub type NodeId = usize;

/// Task identifier, stable for the lifetime of an instance.
pub type TaskId = usize;

/// A directed service edge: traverse `source → target`, paying `cost`, and
/// consume `demand` units of vehicle capacity.
///
/// # Examples
///
/// ```
/// use u_carp::models::Task;
///
/// let t = Task::new(7, 0, 3, 12.5, 4.0).unwrap();
/// assert_eq!(t.id(), 7);
/// assert_eq!(t.source(), 0);
/// assert_eq!(t.target(), 3);
/// assert_eq!(t.demand(), 4.0);
///
/// assert!(Task::new(1, 0, 1, -1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    source: NodeId,
    target: NodeId,
    cost: f64,
    demand: f64,
}

impl Task {
    /// Creates a new task.
    ///
    /// Fails if `cost` or `demand` is negative or not finite.
    pub fn new(id: TaskId, source: NodeId, target: NodeId, cost: f64, demand: f64) -> Result<Self> {
        check_non_negative("traversal cost", cost)?;
        check_non_negative("demand", demand)?;
        Ok(Self {
            id,
            source,
            target,
            cost,
            demand,
        })
    }

    /// Task ID.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Node where service starts.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Node where service ends.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Cost of traversing the task while serving it.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Capacity consumed by serving this task.
    pub fn demand(&self) -> f64 {
        self.demand
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} -> {} (cost {}, demand {})",
            self.id, self.source, self.target, self.cost, self.demand
        )
    }
}

pub(crate) fn check_non_negative(what: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CarpError::NegativeValue { what, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let t = Task::new(3, 1, 2, 5.0, 2.5).expect("valid");
        assert_eq!(t.id(), 3);
        assert_eq!(t.source(), 1);
        assert_eq!(t.target(), 2);
        assert_eq!(t.cost(), 5.0);
        assert_eq!(t.demand(), 2.5);
    }

    #[test]
    fn test_task_zero_values_allowed() {
        let t = Task::new(0, 0, 0, 0.0, 0.0).expect("valid");
        assert_eq!(t.cost(), 0.0);
        assert_eq!(t.demand(), 0.0);
    }

    #[test]
    fn test_task_invalid_values() {
        assert!(matches!(
            Task::new(0, 0, 1, -0.5, 1.0),
            Err(CarpError::NegativeValue {
                what: "traversal cost",
                ..
            })
        ));
        assert!(matches!(
            Task::new(0, 0, 1, 1.0, -2.0),
            Err(CarpError::NegativeValue { what: "demand", .. })
        ));
        assert!(Task::new(0, 0, 1, f64::NAN, 1.0).is_err());
        assert!(Task::new(0, 0, 1, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_task_display() {
        let t = Task::new(4, 2, 5, 3.0, 1.0).expect("valid");
        assert_eq!(t.to_string(), "#4 2 -> 5 (cost 3, demand 1)");
    }

    #[test]
    fn test_task_serde() {
        let t = Task::new(1, 0, 2, 7.5, 3.0).expect("valid");
        let json = serde_json::to_string(&t).expect("serialize");
        let back: Task = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(t, back);
    }
}
