//! Directed network with non-negative arc costs.

use super::task::check_non_negative;
use super::NodeId;
use crate::error::{CarpError, Result};

/// A directed arc with its traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Head node of the arc.
    pub to: NodeId,
    /// Traversal cost (non-negative).
    pub cost: f64,
}

/// Directed road network stored as adjacency lists.
///
/// Nodes are identified by `0..num_nodes`. Parallel arcs are allowed;
/// shortest-path search simply keeps the cheapest.
///
/// # Examples
///
/// ```
/// use u_carp::models::Network;
///
/// let mut net = Network::new(3);
/// net.add_arc(0, 1, 4.0).unwrap();
/// net.add_edge(1, 2, 1.5).unwrap();
/// assert_eq!(net.num_nodes(), 3);
/// assert_eq!(net.num_arcs(), 3);
/// assert!(net.add_arc(0, 9, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    adjacency: Vec<Vec<Arc>>,
}

impl Network {
    /// Creates a network with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    /// Adds a directed arc `from → to`.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId, cost: f64) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        check_non_negative("arc cost", cost)?;
        self.adjacency[from].push(Arc { to, cost });
        Ok(())
    }

    /// Adds a two-way street as a pair of opposite arcs with the same cost.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, cost: f64) -> Result<()> {
        self.add_arc(a, b, cost)?;
        self.add_arc(b, a, cost)
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed arcs.
    pub fn num_arcs(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if `node` belongs to this network.
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Outgoing arcs of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn arcs_from(&self, node: NodeId) -> &[Arc] {
        &self.adjacency[node]
    }

    /// Returns an error if `node` is not part of the network.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(CarpError::UnknownNode {
                node,
                num_nodes: self.num_nodes(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_empty() {
        let net = Network::new(0);
        assert_eq!(net.num_nodes(), 0);
        assert_eq!(net.num_arcs(), 0);
        assert!(!net.contains(0));
    }

    #[test]
    fn test_add_arc_directed() {
        let mut net = Network::new(2);
        net.add_arc(0, 1, 3.0).expect("valid arc");
        assert_eq!(net.arcs_from(0), &[Arc { to: 1, cost: 3.0 }]);
        assert!(net.arcs_from(1).is_empty());
    }

    #[test]
    fn test_add_edge_both_directions() {
        let mut net = Network::new(2);
        net.add_edge(0, 1, 2.0).expect("valid edge");
        assert_eq!(net.num_arcs(), 2);
        assert_eq!(net.arcs_from(1)[0].to, 0);
    }

    #[test]
    fn test_add_arc_rejects_unknown_node() {
        let mut net = Network::new(2);
        assert!(matches!(
            net.add_arc(0, 2, 1.0),
            Err(CarpError::UnknownNode {
                node: 2,
                num_nodes: 2
            })
        ));
        assert_eq!(net.num_arcs(), 0);
    }

    #[test]
    fn test_add_arc_rejects_negative_cost() {
        let mut net = Network::new(2);
        assert!(matches!(
            net.add_arc(0, 1, -1.0),
            Err(CarpError::NegativeValue { .. })
        ));
    }
}
