//! Single-source shortest paths over a [`Network`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::models::{Network, NodeId};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on cost, ties by node id for a deterministic pop order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the shortest-path cost from `source` to every node.
///
/// Unreachable nodes get `f64::INFINITY`. Arc costs are non-negative by
/// construction of [`Network`], so plain Dijkstra applies.
///
/// # Examples
///
/// ```
/// use u_carp::models::Network;
/// use u_carp::distance::shortest_paths_from;
///
/// let mut net = Network::new(3);
/// net.add_arc(0, 1, 2.0).unwrap();
/// net.add_arc(1, 2, 2.0).unwrap();
/// net.add_arc(0, 2, 5.0).unwrap();
///
/// let dist = shortest_paths_from(&net, 0).unwrap();
/// assert_eq!(dist, vec![0.0, 2.0, 4.0]);
/// ```
pub fn shortest_paths_from(network: &Network, source: NodeId) -> Result<Vec<f64>> {
    network.check_node(source)?;

    let mut distances = vec![f64::INFINITY; network.num_nodes()];
    let mut heap = BinaryHeap::new();

    distances[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry
        if cost > distances[node] {
            continue;
        }

        for arc in network.arcs_from(node) {
            let next_cost = cost + arc.cost;
            if next_cost < distances[arc.to] {
                distances[arc.to] = next_cost;
                heap.push(State {
                    cost: next_cost,
                    node: arc.to,
                });
            }
        }
    }

    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarpError;

    #[test]
    fn test_prefers_cheaper_detour() {
        let mut net = Network::new(4);
        net.add_arc(0, 3, 10.0).expect("arc");
        net.add_arc(0, 1, 1.0).expect("arc");
        net.add_arc(1, 2, 1.0).expect("arc");
        net.add_arc(2, 3, 1.0).expect("arc");
        let dist = shortest_paths_from(&net, 0).expect("source exists");
        assert_eq!(dist[3], 3.0);
    }

    #[test]
    fn test_unreachable_is_infinite() {
        let mut net = Network::new(3);
        net.add_arc(1, 0, 1.0).expect("arc");
        let dist = shortest_paths_from(&net, 0).expect("source exists");
        assert_eq!(dist[0], 0.0);
        assert_eq!(dist[1], f64::INFINITY);
        assert_eq!(dist[2], f64::INFINITY);
    }

    #[test]
    fn test_parallel_arcs_keep_cheapest() {
        let mut net = Network::new(2);
        net.add_arc(0, 1, 7.0).expect("arc");
        net.add_arc(0, 1, 3.0).expect("arc");
        let dist = shortest_paths_from(&net, 0).expect("source exists");
        assert_eq!(dist[1], 3.0);
    }

    #[test]
    fn test_zero_cost_arcs() {
        let mut net = Network::new(3);
        net.add_arc(0, 1, 0.0).expect("arc");
        net.add_arc(1, 2, 0.0).expect("arc");
        let dist = shortest_paths_from(&net, 0).expect("source exists");
        assert_eq!(dist, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unknown_source() {
        let net = Network::new(2);
        assert!(matches!(
            shortest_paths_from(&net, 5),
            Err(CarpError::UnknownNode { node: 5, .. })
        ));
    }
}
