//! Trellis Graph - Directed weighted graphs and their traversals
//!
//! This crate provides a generic directed graph whose nodes are any
//! hashable identity and whose edges carry a weight, together with
//! breadth-first and depth-first traversals that compute a predecessor
//! tree from a start node.
//!
//! # Architecture
//!
//! The graph is a map from each node to its adjacency map (neighbor ->
//! weight). Single node and edge operations are O(1) on average; removing
//! a node is O(V) because incoming edges are found by sweeping every
//! adjacency map. Traversals borrow the graph immutably and return a
//! fresh [`PredecessorMap`].
//!
//! # Example
//!
//! ```
//! use trellis_graph::{breadth_first, Graph};
//!
//! let mut graph = Graph::new();
//! for node in ['a', 'b', 'c'] {
//!     graph.add_node(node);
//! }
//! graph.set_edge(&'a', &'b', 15).unwrap();
//! graph.set_edge(&'b', &'c', 7).unwrap();
//!
//! let tree = breadth_first(&graph, &'a').unwrap();
//! assert_eq!(tree.path_to(&'c'), Some(vec!['a', 'b', 'c']));
//! ```

mod edge;
mod error;
mod graph;
mod predecessors;
mod store;
mod traversal;

pub use edge::{EdgeRef, GraphEdge};
pub use error::{GraphError, Result};
pub use graph::{Adjacency, Graph, GraphStats};
pub use predecessors::{PredecessorMap, ROOT_SENTINEL};
pub use store::{GraphStore, StoreError, FORMAT_VERSION};
pub use traversal::{
    breadth_first, breadth_first_with, depth_first, depth_first_with, traverse, traverse_with,
    TraversalOrder,
};
