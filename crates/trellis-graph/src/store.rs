use crate::graph::Graph;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use std::hash::Hash;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const GRAPH_KEY: &str = "graph";
const VERSION_KEY: &str = "format_version";

/// Bumped whenever the serialized layout of [`Graph`] changes.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("snapshot format version {found:?} is not supported (expected {})", FORMAT_VERSION)]
    UnsupportedVersion { found: Option<u32> },
}

/// Persists graph snapshots in a sled database.
pub struct GraphStore {
    db: Db,
}

impl GraphStore {
    /// Opens or creates a graph store at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Saves the entire graph to the store, replacing any earlier snapshot.
    ///
    /// The graph is bincode-encoded and tagged with [`FORMAT_VERSION`].
    pub fn save_graph<N, E>(&self, graph: &Graph<N, E>) -> Result<(), StoreError>
    where
        N: Serialize + Eq + Hash,
        E: Serialize,
    {
        let bytes = bincode::serialize(graph)?;
        debug!(
            "saving graph snapshot v{} ({} bytes)",
            FORMAT_VERSION,
            bytes.len()
        );
        self.db.insert(VERSION_KEY, FORMAT_VERSION.to_le_bytes().to_vec())?;
        self.db.insert(GRAPH_KEY, bytes)?;
        self.db.flush()?;
        Ok(())
    }

    /// Loads the graph from the store, or `None` if nothing was saved.
    ///
    /// Fails with [`StoreError::UnsupportedVersion`] when the snapshot's tag is
    /// missing or differs from [`FORMAT_VERSION`].
    pub fn load_graph<N, E>(&self) -> Result<Option<Graph<N, E>>, StoreError>
    where
        N: DeserializeOwned + Eq + Hash,
        E: DeserializeOwned,
    {
        let Some(bytes) = self.db.get(GRAPH_KEY)? else {
            return Ok(None);
        };

        let found = self.format_version()?;
        if found != Some(FORMAT_VERSION) {
            return Err(StoreError::UnsupportedVersion { found });
        }

        Ok(Some(bincode::deserialize(&bytes)?))
    }

    /// Version tag of the stored snapshot, if one was written.
    pub fn format_version(&self) -> Result<Option<u32>, StoreError> {
        Ok(self
            .db
            .get(VERSION_KEY)?
            .and_then(|raw| <[u8; 4]>::try_from(&raw[..]).ok())
            .map(u32::from_le_bytes))
    }

    /// Removes the snapshot and its version tag.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.db.remove(GRAPH_KEY)?;
        self.db.remove(VERSION_KEY)?;
        self.db.flush()?;
        Ok(())
    }
}
