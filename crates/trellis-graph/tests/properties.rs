//! Property-based tests for graph mutation and traversal.
//!
//! Uses proptest to validate:
//! - Node removal takes every incoming and outgoing edge with it
//! - Edge removal only touches the one directed edge
//! - Breadth-first trees reach exactly the reachable set along shortest hops
//!   (cross-checked against petgraph's Dijkstra with unit weights)
//! - Depth-first trees reach the same set using only real edges

use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use std::collections::HashSet;
use trellis_graph::{breadth_first, depth_first, Graph};

/// A node count plus a list of directed edges between those nodes.
fn graph_strategy() -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
    (1u32..24).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..80)))
}

fn build(n: u32, edges: &[(u32, u32)]) -> Graph<u32, u32> {
    let mut graph = Graph::new();
    for node in 0..n {
        graph.add_node(node);
    }
    for (weight, (from, to)) in edges.iter().enumerate() {
        graph
            .set_edge(from, to, weight as u32)
            .expect("both endpoints were added");
    }
    graph
}

fn reference(n: u32, edges: &[(u32, u32)]) -> DiGraph<u32, ()> {
    let mut graph = DiGraph::new();
    for node in 0..n {
        graph.add_node(node);
    }
    let unique: HashSet<(u32, u32)> = edges.iter().copied().collect();
    for (from, to) in unique {
        graph.add_edge(NodeIndex::new(from as usize), NodeIndex::new(to as usize), ());
    }
    graph
}

proptest! {
    /// Property: distinct adds count once each
    #[test]
    fn prop_add_node_counts_distinct(nodes in prop::collection::vec(0u8..50, 0..100)) {
        let mut graph: Graph<u8, ()> = Graph::new();
        for node in &nodes {
            graph.add_node(*node);
        }

        let distinct: HashSet<u8> = nodes.iter().copied().collect();
        prop_assert_eq!(graph.num_nodes(), distinct.len());
        for node in distinct {
            prop_assert!(graph.contains_node(&node));
        }
    }

    /// Property: removing a node removes every edge touching it
    #[test]
    fn prop_remove_node_cascades((n, edges) in graph_strategy(), victim in 0u32..24) {
        let mut graph = build(n, &edges);
        let victim = victim % n;
        let before = graph.num_nodes();

        prop_assert!(graph.remove_node(&victim));
        prop_assert!(!graph.contains_node(&victim));
        prop_assert_eq!(graph.num_nodes(), before - 1);

        for other in 0..n {
            prop_assert!(!graph.contains_edge(&other, &victim));
            prop_assert!(!graph.contains_edge(&victim, &other));
        }

        // Edges between survivors are untouched
        for (from, to) in &edges {
            if *from != victim && *to != victim {
                prop_assert!(graph.contains_edge(from, to));
            }
        }
    }

    /// Property: removing (u, v) never removes (v, u)
    #[test]
    fn prop_remove_edge_is_directed((n, edges) in graph_strategy()) {
        prop_assume!(!edges.is_empty());
        let mut graph = build(n, &edges);
        let (from, to) = edges[0];
        let reverse_existed = graph.contains_edge(&to, &from);

        prop_assert!(graph.remove_edge(&from, &to));
        prop_assert!(!graph.contains_edge(&from, &to));
        if from != to {
            prop_assert_eq!(graph.contains_edge(&to, &from), reverse_existed);
        }
    }

    /// Property: set then get returns the last weight written
    #[test]
    fn prop_set_get_round_trip((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);

        for (from, to) in &edges {
            let last = edges
                .iter()
                .rposition(|edge| edge == &(*from, *to))
                .expect("edge comes from this list");
            prop_assert_eq!(graph.get_edge(from, to), Ok(&(last as u32)));
        }
    }

    /// Property: breadth-first reaches exactly the reachable set, along shortest hops
    #[test]
    fn prop_breadth_first_shortest_hops((n, edges) in graph_strategy(), start in 0u32..24) {
        let start = start % n;
        let graph = build(n, &edges);
        let oracle = reference(n, &edges);

        let tree = breadth_first(&graph, &start).expect("start exists");
        let distances =
            petgraph::algo::dijkstra(&oracle, NodeIndex::new(start as usize), None, |_| 1usize);

        prop_assert_eq!(tree.predecessor(&start), Some(None));
        prop_assert_eq!(tree.len(), distances.len());
        for (index, distance) in distances {
            let node = index.index() as u32;
            prop_assert_eq!(tree.depth(&node), Some(distance));
        }
    }

    /// Property: depth-first reaches the same set using only real edges
    #[test]
    fn prop_depth_first_uses_real_edges((n, edges) in graph_strategy(), start in 0u32..24) {
        let start = start % n;
        let graph = build(n, &edges);

        let dfs = depth_first(&graph, &start).expect("start exists");
        let bfs = breadth_first(&graph, &start).expect("start exists");

        let dfs_nodes: HashSet<u32> = dfs.nodes().copied().collect();
        let bfs_nodes: HashSet<u32> = bfs.nodes().copied().collect();
        prop_assert_eq!(dfs_nodes, bfs_nodes);

        prop_assert_eq!(dfs.predecessor(&start), Some(None));
        for (parent, child) in dfs.tree_edges() {
            prop_assert!(graph.contains_edge(parent, child));
        }
        // Every node hangs off the root
        for node in dfs.nodes() {
            let path = dfs.path_to(node).expect("node was reached");
            prop_assert_eq!(path.first(), Some(&start));
        }
    }
}
