//! Core graph data structure.
//!
//! A `Graph` maps every node to its adjacency map (neighbor -> edge
//! weight). There is no reverse index, so removing a node has to sweep
//! every adjacency map for edges pointing at it.

use crate::edge::EdgeRef;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Outgoing edges of a single node, keyed by destination.
pub type Adjacency<N, E> = HashMap<N, E>;

/// A directed, weighted graph.
///
/// Nodes are opaque identities of type `N`; edges carry a weight of type
/// `E`. An edge may only connect nodes that have already been added.
/// Self-loops are allowed, and the edge (u, v) is independent of (v, u).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize + Eq + Hash, E: Serialize",
    deserialize = "N: Deserialize<'de> + Eq + Hash, E: Deserialize<'de>"
))]
pub struct Graph<N, E> {
    nodes: HashMap<N, Adjacency<N, E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<N, E> Graph<N, E>
where
    N: Eq + Hash + Clone,
{
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Does nothing if the node is already present.
    pub fn add_node(&mut self, node: N) {
        self.nodes.entry(node).or_default();
    }

    /// Returns true if the node is in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Returns true if there is an edge from `from` to `to`.
    ///
    /// A missing `from` node is not an error, just a missing edge.
    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.nodes
            .get(from)
            .is_some_and(|adjacency| adjacency.contains_key(to))
    }

    /// Gets the weight of the edge from `from` to `to`.
    pub fn get_edge(&self, from: &N, to: &N) -> Result<&E, N> {
        self.nodes
            .get(from)
            .and_then(|adjacency| adjacency.get(to))
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Creates or overwrites the edge from `from` to `to`.
    ///
    /// Both nodes must already exist; edges never create nodes. Returns
    /// the weight that was replaced, if any.
    pub fn set_edge(&mut self, from: &N, to: &N, weight: E) -> Result<Option<E>, N> {
        if !self.nodes.contains_key(to) {
            return Err(GraphError::InvalidNode(to.clone()));
        }
        let adjacency = self
            .nodes
            .get_mut(from)
            .ok_or_else(|| GraphError::InvalidNode(from.clone()))?;

        Ok(adjacency.insert(to.clone(), weight))
    }

    /// Removes a node along with every edge leaving or entering it.
    ///
    /// Returns false if the node was not in the graph.
    pub fn remove_node(&mut self, node: &N) -> bool {
        // Incoming edges: no reverse index, so check every adjacency map.
        for adjacency in self.nodes.values_mut() {
            adjacency.remove(node);
        }

        self.nodes.remove(node).is_some()
    }

    /// Removes the single edge from `from` to `to`.
    ///
    /// The reverse edge, if any, is left alone. Returns false if there was
    /// no such edge (including when either node is missing).
    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        self.nodes
            .get_mut(from)
            .is_some_and(|adjacency| adjacency.remove(to).is_some())
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of outgoing edges of `node`.
    pub fn num_neighbors(&self, node: &N) -> Result<usize, N> {
        self.outgoing(node).map(HashMap::len)
    }

    /// Returns the total number of edges.
    pub fn num_edges(&self) -> usize {
        self.nodes.values().map(HashMap::len).sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the adjacency map of `node`.
    pub fn outgoing(&self, node: &N) -> Result<&Adjacency<N, E>, N> {
        self.nodes
            .get(node)
            .ok_or_else(|| GraphError::InvalidNode(node.clone()))
    }

    /// Iterates over the `(neighbor, weight)` pairs leaving `node`.
    pub fn neighbors(&self, node: &N) -> Result<hash_map::Iter<'_, N, E>, N> {
        self.outgoing(node).map(HashMap::iter)
    }

    /// Looks up a node's entry, returning the stored node and its adjacency.
    pub fn find(&self, node: &N) -> Option<(&N, &Adjacency<N, E>)> {
        self.nodes.get_key_value(node)
    }

    /// Iterates over every `(node, adjacency)` pair in unspecified order.
    ///
    /// Each call starts a fresh pass over the graph.
    pub fn iter(&self) -> hash_map::Iter<'_, N, Adjacency<N, E>> {
        self.nodes.iter()
    }

    /// Iterates over all nodes.
    pub fn nodes(&self) -> hash_map::Keys<'_, N, Adjacency<N, E>> {
        self.nodes.keys()
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, N, E>> + '_ {
        self.nodes.iter().flat_map(|(from, adjacency)| {
            adjacency
                .iter()
                .map(move |(to, weight)| EdgeRef { from, to, weight })
        })
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<'a, N, E> IntoIterator for &'a Graph<N, E> {
    type Item = (&'a N, &'a Adjacency<N, E>);
    type IntoIter = hash_map::Iter<'a, N, Adjacency<N, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<N, E> PartialEq for Graph<N, E>
where
    N: Eq + Hash,
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

/// Writes the graph as an adjacency list, one line per node:
///
/// ```text
/// a | (b:15) (c:32)
/// b |
/// ```
///
/// Labels are padded to the widest one. Every edge token is followed by a
/// single space, and line order follows the graph's iteration order.
impl<N, E> fmt::Display for Graph<N, E>
where
    N: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<(String, &Adjacency<N, E>)> = self
            .nodes
            .iter()
            .map(|(node, adjacency)| (node.to_string(), adjacency))
            .collect();
        let width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        for (label, adjacency) in rows {
            write!(f, "{label:<width$} | ")?;
            for (neighbor, weight) in adjacency {
                write!(f, "({neighbor}:{weight}) ")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Graph statistics for status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

impl<N, E> Graph<N, E>
where
    N: Eq + Hash + Clone,
{
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.num_nodes(),
            edge_count: self.num_edges(),
        }
    }
}
