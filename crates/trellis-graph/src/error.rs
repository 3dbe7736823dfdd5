//! Error types for graph operations.

use thiserror::Error;

/// Failures surfaced by graph queries, mutations, and traversals.
///
/// Operations that answer a yes/no question (`contains_*`, `remove_*`)
/// report "not found" through their boolean result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<N> {
    /// The operation requires a node that has not been added.
    #[error("invalid node: {0:?} is not in the graph")]
    InvalidNode(N),

    /// There is no edge between the two nodes (or one of them is missing).
    #[error("edge not found: {from:?} -> {to:?}")]
    EdgeNotFound { from: N, to: N },
}

pub type Result<T, N> = std::result::Result<T, GraphError<N>>;
