//! Traversal output: which node discovered which.

use serde::Serialize;
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Text form of the root's missing predecessor.
pub const ROOT_SENTINEL: &str = "-1";

/// The predecessor tree produced by a traversal.
///
/// Every discovered node maps to the node that discovered it; the start
/// node maps to `None`. Nodes that were never reached are absent.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
#[serde(bound(serialize = "N: Serialize + Eq + Hash"))]
pub struct PredecessorMap<N> {
    parents: HashMap<N, Option<N>>,
    #[serde(skip)]
    root: N,
}

impl<N> PredecessorMap<N>
where
    N: Eq + Hash + Clone,
{
    /// Starts a map containing only the root.
    pub(crate) fn rooted(root: N) -> Self {
        let mut parents = HashMap::new();
        parents.insert(root.clone(), None);
        Self { parents, root }
    }

    /// Records `node` as discovered by `predecessor`.
    ///
    /// Returns false (and changes nothing) if `node` was already discovered.
    pub(crate) fn discover(&mut self, node: N, predecessor: N) -> bool {
        match self.parents.entry(node) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(Some(predecessor));
                true
            }
        }
    }

    /// The node the traversal started from.
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Returns true if `node` was reached.
    pub fn contains(&self, node: &N) -> bool {
        self.parents.contains_key(node)
    }

    /// Looks up the predecessor of `node`.
    ///
    /// `None` means the node was not reached; `Some(None)` means it is the
    /// root.
    pub fn predecessor(&self, node: &N) -> Option<Option<&N>> {
        self.parents.get(node).map(Option::as_ref)
    }

    /// Number of reached nodes, root included.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Always false: the root is present in every map.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterates over `(node, predecessor)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, Option<&N>)> + '_ {
        self.parents
            .iter()
            .map(|(node, parent)| (node, parent.as_ref()))
    }

    /// Iterates over the reached nodes.
    pub fn nodes(&self) -> hash_map::Keys<'_, N, Option<N>> {
        self.parents.keys()
    }

    /// Iterates over the `(predecessor, node)` edges of the tree.
    pub fn tree_edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.parents
            .iter()
            .filter_map(|(node, parent)| parent.as_ref().map(|parent| (parent, node)))
    }

    /// Follows predecessor links from `node` back to the root.
    ///
    /// The returned path starts at the root and ends at `node`. Returns
    /// `None` if `node` was not reached.
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        let mut path = vec![node.clone()];
        let mut current = self.parents.get(node)?;

        while let Some(parent) = current {
            path.push(parent.clone());
            // Every recorded predecessor was itself recorded first.
            current = self.parents.get(parent)?;
        }

        path.reverse();
        Some(path)
    }

    /// Number of tree edges between the root and `node`.
    pub fn depth(&self, node: &N) -> Option<usize> {
        self.path_to(node).map(|path| path.len() - 1)
    }

    /// Consumes the map, returning the raw node -> predecessor table.
    pub fn into_inner(self) -> HashMap<N, Option<N>> {
        self.parents
    }
}

impl<N: Eq + Hash> PartialEq for PredecessorMap<N> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.parents == other.parents
    }
}

impl<N: Eq + Hash> Eq for PredecessorMap<N> {}

/// One `node: predecessor` line per reached node, root shown as `-1`.
impl<N: fmt::Display> fmt::Display for PredecessorMap<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, parent) in &self.parents {
            match parent {
                Some(parent) => writeln!(f, "{node}: {parent}")?,
                None => writeln!(f, "{node}: {ROOT_SENTINEL}")?,
            }
        }
        Ok(())
    }
}
