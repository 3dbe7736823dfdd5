//! Per-directory configuration stored in `.trellis/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use trellis_graph::TraversalOrder;

/// Directory holding Trellis state, relative to the project root.
pub const STATE_DIR: &str = ".trellis";
const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Traversal used when `--order` is not given.
    pub default_order: TraversalOrder,
    /// Snapshot database location, relative to the project root.
    pub store_path: PathBuf,
    /// Colorize terminal output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_order: TraversalOrder::BreadthFirst,
            store_path: PathBuf::from(STATE_DIR).join("store"),
            color: true,
        }
    }
}

impl Config {
    /// Path of the config file under `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(STATE_DIR).join(CONFIG_FILE)
    }

    /// Loads the config under `root`, falling back to defaults if absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(root);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        serde_json::from_str(&text).map_err(|source| ConfigError::Json { path, source })
    }

    /// Writes the config under `root`, creating the state directory.
    pub fn save(&self, root: &Path) -> Result<PathBuf, ConfigError> {
        let path = Self::path(root);
        let dir = root.join(STATE_DIR);
        fs::create_dir_all(&dir).map_err(|source| ConfigError::Io { path: dir, source })?;

        let text = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, text).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
