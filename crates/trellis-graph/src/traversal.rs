//! Breadth-first and depth-first traversal.
//!
//! Both algorithms take a shared borrow of the graph and a start node and
//! return a fresh [`PredecessorMap`] holding exactly the nodes reachable
//! from the start. Neither keeps any state between calls.
//!
//! The `_with` variants also accept an observer that is called at the
//! moment each node is discovered, root first (with no predecessor). This
//! is meant for live presentation such as highlighting; the result is the
//! same with or without it.

use crate::error::Result;
use crate::graph::Graph;
use crate::predecessors::PredecessorMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::hash::Hash;
use tracing::debug;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Round-by-round expansion of a frontier.
    #[default]
    BreadthFirst,
    /// Follow the first undiscovered neighbor as deep as possible.
    DepthFirst,
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
        };
        write!(f, "{}", s)
    }
}

/// Runs a breadth-first traversal from `start`.
///
/// The path from the root to any node in the result has the minimum
/// possible number of edges.
pub fn breadth_first<N, E>(graph: &Graph<N, E>, start: &N) -> Result<PredecessorMap<N>, N>
where
    N: Eq + Hash + Clone,
{
    breadth_first_with(graph, start, |_, _| {})
}

/// Runs a breadth-first traversal, reporting each discovery to `observer`.
pub fn breadth_first_with<N, E, F>(
    graph: &Graph<N, E>,
    start: &N,
    mut observer: F,
) -> Result<PredecessorMap<N>, N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N, Option<&N>),
{
    graph.outgoing(start)?;

    let mut predecessors = PredecessorMap::rooted(start.clone());
    observer(start, None);

    let mut frontier = vec![start];
    let mut rounds = 0usize;

    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();

        for &node in &frontier {
            for neighbor in graph.outgoing(node)?.keys() {
                if predecessors.discover(neighbor.clone(), node.clone()) {
                    observer(neighbor, Some(node));
                    next_frontier.push(neighbor);
                }
            }
        }

        frontier = next_frontier;
        rounds += 1;
    }

    debug!(
        "breadth-first search reached {} nodes in {} rounds",
        predecessors.len(),
        rounds
    );

    Ok(predecessors)
}

/// Runs a depth-first traversal from `start`.
pub fn depth_first<N, E>(graph: &Graph<N, E>, start: &N) -> Result<PredecessorMap<N>, N>
where
    N: Eq + Hash + Clone,
{
    depth_first_with(graph, start, |_, _| {})
}

/// Runs a depth-first traversal, reporting each discovery to `observer`.
///
/// Uses an explicit stack of neighbor cursors rather than recursion, but
/// discovers nodes in the same order a recursive search would: the first
/// undiscovered neighbor is explored to exhaustion before the next one is
/// tried.
pub fn depth_first_with<N, E, F>(
    graph: &Graph<N, E>,
    start: &N,
    mut observer: F,
) -> Result<PredecessorMap<N>, N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N, Option<&N>),
{
    let root_neighbors = graph.outgoing(start)?.keys();

    let mut predecessors = PredecessorMap::rooted(start.clone());
    observer(start, None);

    let mut stack: Vec<(&N, hash_map::Keys<'_, N, E>)> = vec![(start, root_neighbors)];
    let mut max_depth = 0usize;

    while let Some((node, neighbors)) = stack.last_mut() {
        let node = *node;
        let next = neighbors.find(|neighbor| !predecessors.contains(neighbor));

        match next {
            Some(neighbor) => {
                predecessors.discover(neighbor.clone(), node.clone());
                observer(neighbor, Some(node));
                stack.push((neighbor, graph.outgoing(neighbor)?.keys()));
                max_depth = max_depth.max(stack.len() - 1);
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(
        "depth-first search reached {} nodes, max depth {}",
        predecessors.len(),
        max_depth
    );

    Ok(predecessors)
}

/// Runs the traversal selected by `order`.
pub fn traverse<N, E>(
    graph: &Graph<N, E>,
    start: &N,
    order: TraversalOrder,
) -> Result<PredecessorMap<N>, N>
where
    N: Eq + Hash + Clone,
{
    traverse_with(graph, start, order, |_, _| {})
}

/// Runs the traversal selected by `order`, reporting each discovery.
pub fn traverse_with<N, E, F>(
    graph: &Graph<N, E>,
    start: &N,
    order: TraversalOrder,
    observer: F,
) -> Result<PredecessorMap<N>, N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N, Option<&N>),
{
    match order {
        TraversalOrder::BreadthFirst => breadth_first_with(graph, start, observer),
        TraversalOrder::DepthFirst => depth_first_with(graph, start, observer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    /// a -> b (15), d -> e (18), a -> c (32), c -> a (33); f is isolated.
    fn sample() -> Graph<char, i32> {
        let mut graph = Graph::new();
        for node in ['a', 'b', 'c', 'd', 'e', 'f'] {
            graph.add_node(node);
        }
        graph.set_edge(&'a', &'b', 15).unwrap();
        graph.set_edge(&'d', &'e', 18).unwrap();
        graph.set_edge(&'a', &'c', 32).unwrap();
        graph.set_edge(&'c', &'a', 33).unwrap();
        graph
    }

    /// Builds a graph over 0..n with the given unit-weight edges.
    fn build(n: u32, edges: &[(u32, u32)]) -> Graph<u32, u32> {
        let mut graph = Graph::new();
        for node in 0..n {
            graph.add_node(node);
        }
        for (from, to) in edges {
            graph.set_edge(from, to, 1).unwrap();
        }
        graph
    }

    #[test]
    fn test_breadth_first_sample() {
        let graph = sample();
        let result = breadth_first(&graph, &'a').unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.predecessor(&'a'), Some(None));
        assert_eq!(result.predecessor(&'b'), Some(Some(&'a')));
        assert_eq!(result.predecessor(&'c'), Some(Some(&'a')));
        for node in ['d', 'e', 'f'] {
            assert!(!result.contains(&node));
        }
    }

    #[test]
    fn test_depth_first_sample() {
        let graph = sample();
        let result = depth_first(&graph, &'a').unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(*result.root(), 'a');
        assert_eq!(result.predecessor(&'b'), Some(Some(&'a')));
        assert_eq!(result.predecessor(&'c'), Some(Some(&'a')));
    }

    #[test]
    fn test_missing_start_is_invalid_node() {
        let graph = sample();

        assert_eq!(
            breadth_first(&graph, &'z'),
            Err(GraphError::InvalidNode('z'))
        );
        assert_eq!(depth_first(&graph, &'z'), Err(GraphError::InvalidNode('z')));
    }

    #[test]
    fn test_isolated_start() {
        let graph = sample();

        let result = breadth_first(&graph, &'f').unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.predecessor(&'f'), Some(None));

        let result = depth_first(&graph, &'f').unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_breadth_first_uses_shortest_hops() {
        // 0 -> 1 -> 2 -> 3 plus a shortcut 0 -> 3
        let graph = build(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        let result = breadth_first(&graph, &0).unwrap();

        assert_eq!(result.predecessor(&3), Some(Some(&0)));
        assert_eq!(result.depth(&3), Some(1));
        assert_eq!(result.depth(&2), Some(2));
    }

    #[test]
    fn test_depth_first_follows_a_single_path() {
        // A chain has only one depth-first tree.
        let graph = build(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let result = depth_first(&graph, &0).unwrap();

        assert_eq!(result.path_to(&4), Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_depth_first_explores_deep_before_wide() {
        // 0 -> 1, 0 -> 2, 1 -> 2. Whichever neighbor of 0 comes first,
        // the tree edges must all be real edges and 2 must be reached
        // from 1 if 1 is explored first.
        let graph = build(3, &[(0, 1), (0, 2), (1, 2)]);

        let mut order = Vec::new();
        let result = depth_first_with(&graph, &0, |node, _| order.push(*node)).unwrap();

        assert_eq!(result.len(), 3);
        if order[1] == 1 {
            assert_eq!(result.predecessor(&2), Some(Some(&1)));
        } else {
            assert_eq!(result.predecessor(&2), Some(Some(&0)));
        }
    }

    #[test]
    fn test_cycles_and_self_loops_terminate() {
        let graph = build(3, &[(0, 0), (0, 1), (1, 2), (2, 0), (2, 2)]);

        let bfs = breadth_first(&graph, &0).unwrap();
        let dfs = depth_first(&graph, &0).unwrap();

        assert_eq!(bfs.len(), 3);
        assert_eq!(dfs.len(), 3);
        assert_eq!(bfs.path_to(&2), Some(vec![0, 1, 2]));
        assert_eq!(dfs.path_to(&2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let n = 100_000;
        let edges: Vec<(u32, u32)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let graph = build(n, &edges);

        let result = depth_first(&graph, &0).unwrap();
        assert_eq!(result.len(), n as usize);
        assert_eq!(result.depth(&(n - 1)), Some(n as usize - 1));
    }

    #[test]
    fn test_observer_sees_every_discovery_once() {
        let graph = build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);

        for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
            let mut seen = Vec::new();
            let result =
                traverse_with(&graph, &0, order, |node, parent| seen.push((*node, parent.copied())))
                    .unwrap();

            assert_eq!(seen.len(), result.len());
            assert_eq!(seen[0], (0, None));
            for (node, parent) in seen {
                assert_eq!(result.predecessor(&node), Some(parent.as_ref()));
            }
        }
    }

    #[test]
    fn test_breadth_first_observer_reports_rounds_in_order() {
        let graph = build(5, &[(0, 1), (0, 2), (1, 3), (2, 4)]);

        let mut seen = Vec::new();
        let result = breadth_first_with(&graph, &0, |node, _| seen.push(*node)).unwrap();

        let depths: Vec<usize> = seen.iter().map(|n| result.depth(n).unwrap()).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_traversal_order_serde_names() {
        assert_eq!(TraversalOrder::default(), TraversalOrder::BreadthFirst);
        assert_eq!(TraversalOrder::DepthFirst.to_string(), "depth_first");
    }
}
