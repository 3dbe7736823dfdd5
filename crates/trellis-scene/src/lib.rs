//! Trellis Scene - Loading graphs from node/edge files
//!
//! A scene file declares nodes with display attributes and the weighted
//! edges between them. This crate reads that format into a
//! [`trellis_graph::Graph`] through its public mutation API and keeps the
//! display attributes alongside it.
//!
//! # Example
//!
//! ```
//! use trellis_scene::Scene;
//!
//! let mut scene = Scene::new();
//! let report = scene.load_str("n:1:A:255:0:0:10:10\nn:2:B:0:0:255:50:10\ne:1:2:3.5\n");
//!
//! assert_eq!(report.edges_loaded, 1);
//! assert!(scene.graph().contains_edge(&1, &2));
//! ```

mod record;
mod scene;
mod style;

pub use record::{Record, RecordError};
pub use scene::{LineError, LoadError, LoadReport, NodeId, Scene, SceneEdge, SkippedEdge};
pub use style::{NodeStyle, Position, Rgb};
