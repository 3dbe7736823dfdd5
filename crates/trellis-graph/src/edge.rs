//! Edge views over the graph.
//!
//! Edges are not stored as standalone values: each one lives inside its
//! source node's adjacency map. These types give callers a flat view of
//! them for listing or export.

use serde::{Deserialize, Serialize};

/// A borrowed directed edge, as yielded by [`Graph::edges`](crate::Graph::edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a, N, E> {
    /// The node the edge leaves.
    pub from: &'a N,
    /// The node the edge enters.
    pub to: &'a N,
    /// The edge's weight.
    pub weight: &'a E,
}

impl<N: Clone, E: Clone> EdgeRef<'_, N, E> {
    /// Clones the endpoints and weight into an owned edge.
    pub fn cloned(&self) -> GraphEdge<N, E> {
        GraphEdge {
            source: self.from.clone(),
            target: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

/// An owned edge for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge<N, E> {
    pub source: N,
    pub target: N,
    pub weight: E,
}

impl<N, E> GraphEdge<N, E> {
    /// Returns true if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_ref_cloned() {
        let (a, b, w) = ('a', 'b', 15);
        let edge = EdgeRef {
            from: &a,
            to: &b,
            weight: &w,
        };

        let owned = edge.cloned();
        assert_eq!(owned.source, 'a');
        assert_eq!(owned.target, 'b');
        assert_eq!(owned.weight, 15);
        assert!(!owned.is_self_loop());
    }

    #[test]
    fn test_self_loop() {
        let edge = GraphEdge {
            source: 3,
            target: 3,
            weight: 1.5,
        };
        assert!(edge.is_self_loop());
    }
}
