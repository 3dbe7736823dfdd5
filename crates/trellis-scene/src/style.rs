//! Display attributes attached to scene nodes.
//!
//! The graph itself only knows node ids. Labels, colors, and positions are
//! kept here, keyed by id, for whatever presentation layer draws the scene.

use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// How a node is presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Text drawn inside the node.
    pub label: String,
    /// Fill color.
    pub color: Rgb,
    /// Center of the node.
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(255, 128, 0).to_string(), "#ff8000");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }
}
