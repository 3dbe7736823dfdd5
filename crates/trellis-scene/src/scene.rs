//! A graph loaded from a scene file, plus its node display attributes.
//!
//! Loading is a single pass over the records in file order:
//! 1. Node records add the node to the graph and store its style
//! 2. Edge records become graph edges when both endpoints already exist
//!
//! Edges naming a node that has not been declared yet are skipped rather
//! than reported as failures, so a partially valid file still loads.

use crate::record::{Record, RecordError};
use crate::style::NodeStyle;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use trellis_graph::Graph;

/// Node ids as they appear in scene files.
pub type NodeId = i32;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    pub error: RecordError,
}

/// An edge record that was dropped because an endpoint was undeclared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedEdge {
    /// 1-based line number.
    pub line: usize,
    pub from: NodeId,
    pub to: NodeId,
}

/// Summary of a load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Node records applied (redeclarations included).
    pub nodes_loaded: usize,
    /// Edge records applied.
    pub edges_loaded: usize,
    /// Edge records referencing undeclared nodes.
    pub skipped_edges: Vec<SkippedEdge>,
    /// Lines that were not valid records.
    pub errors: Vec<LineError>,
}

/// An edge as a presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f32,
    /// True when the reverse edge also exists.
    pub bidirectional: bool,
}

/// A weighted graph with per-node display attributes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    graph: Graph<NodeId, f32>,
    styles: HashMap<NodeId, NodeStyle>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a scene file into a new scene.
    pub fn open(path: impl AsRef<Path>) -> Result<(Self, LoadReport), LoadError> {
        let mut scene = Self::new();
        let report = scene.load(path)?;
        Ok((scene, report))
    }

    /// Replaces the scene's contents with those of a scene file.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self.load_str(&text);
        debug!(
            "loaded {}: {} nodes, {} edges ({} skipped, {} bad lines)",
            path.display(),
            report.nodes_loaded,
            report.edges_loaded,
            report.skipped_edges.len(),
            report.errors.len()
        );
        Ok(report)
    }

    /// Replaces the scene's contents with the records in `text`.
    pub fn load_str(&mut self, text: &str) -> LoadReport {
        self.clear();
        let mut report = LoadReport::default();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;

            match Record::parse(line) {
                Ok(Some(record)) => self.apply(record, line_number, &mut report),
                Ok(None) => {}
                Err(error) => {
                    warn!("skipping line {}: {}", line_number, error);
                    report.errors.push(LineError {
                        line: line_number,
                        error,
                    });
                }
            }
        }

        report
    }

    fn apply(&mut self, record: Record, line: usize, report: &mut LoadReport) {
        match record {
            Record::Node { id, style } => {
                self.graph.add_node(id);
                self.styles.insert(id, style);
                report.nodes_loaded += 1;
            }
            Record::Edge { from, to, weight } => {
                if self.graph.set_edge(&from, &to, weight).is_ok() {
                    report.edges_loaded += 1;
                } else {
                    debug!("line {}: edge {} -> {} has an undeclared endpoint", line, from, to);
                    report.skipped_edges.push(SkippedEdge { line, from, to });
                }
            }
        }
    }

    /// Removes all nodes, edges, and styles.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.styles.clear();
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<NodeId, f32> {
        &self.graph
    }

    /// Display attributes of a node.
    pub fn style(&self, id: NodeId) -> Option<&NodeStyle> {
        self.styles.get(&id)
    }

    /// The node's label, or its id if it has none.
    pub fn label(&self, id: NodeId) -> String {
        match self.styles.get(&id) {
            Some(style) if !style.label.is_empty() => style.label.clone(),
            _ => id.to_string(),
        }
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.graph.nodes().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Every edge, sorted by endpoints, with its bidirectional flag.
    pub fn edges(&self) -> Vec<SceneEdge> {
        let mut edges: Vec<SceneEdge> = self
            .graph
            .edges()
            .map(|edge| SceneEdge {
                from: *edge.from,
                to: *edge.to,
                weight: *edge.weight,
                bidirectional: self.graph.contains_edge(edge.to, edge.from),
            })
            .collect();
        edges.sort_by_key(|edge| (edge.from, edge.to));
        edges
    }
}
