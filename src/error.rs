//! Error types for arc routing evaluation.

use thiserror::Error as ThisError;

use crate::models::{NodeId, TaskId};

/// Errors raised while configuring, loading or splitting a CARP instance.
#[derive(Debug, ThisError)]
pub enum CarpError {
    /// Capacity or depot missing, or otherwise unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A node id outside the network.
    #[error("unknown node {node} (network has {num_nodes} nodes)")]
    UnknownNode {
        /// Offending node id.
        node: NodeId,
        /// Number of nodes in the network.
        num_nodes: usize,
    },

    /// A cost or demand that is negative or not finite.
    #[error("invalid {what}: {value}")]
    NegativeValue {
        /// Which quantity was rejected (e.g. "demand").
        what: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A single task needs more than one vehicle can carry.
    #[error(
        "task {task} at tour position {position} has demand {demand} exceeding capacity {capacity}"
    )]
    InfeasibleSegment {
        /// Position of the task in the giant tour.
        position: usize,
        /// Task id.
        task: TaskId,
        /// Demand of the task.
        demand: f64,
        /// Vehicle capacity.
        capacity: f64,
    },

    /// No chain of finite trips reaches the given cut point.
    #[error("cut point {cut_point} is unreachable by any feasible trip")]
    Unreachable {
        /// First cut point that no feasible segment reaches.
        cut_point: usize,
    },

    /// A task appears twice in a giant tour.
    #[error("task {task} already present in giant tour")]
    DuplicateTask {
        /// Duplicated task id.
        task: TaskId,
    },

    /// Malformed instance file content.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CarpError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarpError>;
