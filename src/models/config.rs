//! Capacity and depot configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Network, NodeId};
use crate::error::{CarpError, Result};

/// Instance condition holding the vehicle capacity.
pub const CONDITION_CAPACITY: &str = "CAPACITE";
/// Instance condition holding the 1-based depot node number.
pub const CONDITION_DEPOT: &str = "NUM_DEPOT";

/// Split configuration: vehicle capacity and depot node.
///
/// Both values are optional while the configuration is assembled; they are
/// checked against the network by [`resolve`](Self::resolve) before any
/// matrix work begins.
///
/// # Examples
///
/// ```
/// use u_carp::models::{Network, SplitConfig};
///
/// let net = Network::new(4);
/// let config = SplitConfig::new().with_capacity(10.0).with_depot(2);
/// assert_eq!(config.resolve(&net).unwrap(), (10.0, 2));
///
/// assert!(SplitConfig::new().with_depot(2).resolve(&net).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    capacity: Option<f64>,
    depot: Option<NodeId>,
}

impl SplitConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads capacity and depot from named integer instance conditions.
    ///
    /// The depot condition is 1-based, as in instance files.
    pub fn from_conditions(conditions: &BTreeMap<String, i64>) -> Result<Self> {
        let mut config = Self::new();
        if let Some(&capacity) = conditions.get(CONDITION_CAPACITY) {
            config.capacity = Some(capacity as f64);
        }
        if let Some(&depot) = conditions.get(CONDITION_DEPOT) {
            if depot < 1 {
                return Err(CarpError::configuration(format!(
                    "{CONDITION_DEPOT} must be a 1-based node number, got {depot}"
                )));
            }
            config.depot = Some((depot - 1) as NodeId);
        }
        Ok(config)
    }

    /// Sets the vehicle capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the depot node (0-based).
    pub fn with_depot(mut self, depot: NodeId) -> Self {
        self.depot = Some(depot);
        self
    }

    /// Vehicle capacity, if set.
    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    /// Depot node, if set.
    pub fn depot(&self) -> Option<NodeId> {
        self.depot
    }

    /// Validates the configuration against `network`, returning
    /// `(capacity, depot)`.
    pub fn resolve(&self, network: &Network) -> Result<(f64, NodeId)> {
        let capacity = self
            .capacity
            .ok_or_else(|| CarpError::configuration("vehicle capacity is not set"))?;
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(CarpError::configuration(format!(
                "vehicle capacity must be a non-negative number, got {capacity}"
            )));
        }
        let depot = self
            .depot
            .ok_or_else(|| CarpError::configuration("depot is not set"))?;
        if !network.contains(depot) {
            return Err(CarpError::configuration(format!(
                "depot {depot} is not a node of the network ({} nodes)",
                network.num_nodes()
            )));
        }
        Ok((capacity, depot))
    }
}
