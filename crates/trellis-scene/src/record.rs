//! Parsing of single scene file records.
//!
//! Each non-blank line is one record with `:`-separated fields:
//!
//! ```text
//! n:id:name:red:green:blue:x:y
//! e:id_start:id_end:edge_value
//! ```

use crate::style::{NodeStyle, Position, Rgb};
use std::str::FromStr;
use thiserror::Error;

/// Fields in a node record after the tag. Names cannot contain `:`.
const NODE_FIELDS: usize = 7;
/// Fields in an edge record after the tag.
const EDGE_FIELDS: usize = 3;

/// A parsed line of a scene file.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Declares a node and its display attributes.
    Node { id: i32, style: NodeStyle },
    /// Declares a directed weighted edge.
    Edge { from: i32, to: i32, weight: f32 },
}

/// Why a line could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown record type '{0}'")]
    UnknownTag(String),

    #[error("'{tag}' record needs {expected} fields, found {found}")]
    FieldCount {
        tag: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },
}

impl Record {
    /// Parses one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, RecordError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(':').collect();
        let (tag, rest) = fields.split_at(1);

        match tag[0].trim() {
            "n" => parse_node(rest).map(Some),
            "e" => parse_edge(rest).map(Some),
            other => Err(RecordError::UnknownTag(other.to_string())),
        }
    }
}

fn parse_node(fields: &[&str]) -> Result<Record, RecordError> {
    if fields.len() != NODE_FIELDS {
        return Err(RecordError::FieldCount {
            tag: "n",
            expected: NODE_FIELDS,
            found: fields.len(),
        });
    }

    let id = field(fields[0], "node id")?;
    let label = fields[1].to_string();
    let color = Rgb::new(
        field(fields[2], "red")?,
        field(fields[3], "green")?,
        field(fields[4], "blue")?,
    );
    let position = Position::new(field(fields[5], "x")?, field(fields[6], "y")?);

    Ok(Record::Node {
        id,
        style: NodeStyle {
            label,
            color,
            position,
        },
    })
}

fn parse_edge(fields: &[&str]) -> Result<Record, RecordError> {
    if fields.len() != EDGE_FIELDS {
        return Err(RecordError::FieldCount {
            tag: "e",
            expected: EDGE_FIELDS,
            found: fields.len(),
        });
    }

    Ok(Record::Edge {
        from: field(fields[0], "start id")?,
        to: field(fields[1], "end id")?,
        weight: field(fields[2], "edge value")?,
    })
}

fn field<T: FromStr>(raw: &str, name: &'static str) -> Result<T, RecordError> {
    raw.trim().parse().map_err(|_| RecordError::InvalidField {
        field: name,
        value: raw.trim().to_string(),
    })
}
