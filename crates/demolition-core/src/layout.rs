//! Structure layout templates.
//!
//! A layout is read-only data consumed once per structure build. Named
//! layouts describe a grid of cell codes (row 0 is the top row, code 0 is
//! empty) plus object overlays that claim a rectangular span of cells.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::Material;
use crate::error::ConfigError;

/// Which template to build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutRef {
    /// Procedural `width × height` block lattice.
    Tower { width: u32, height: u32 },
    /// Entry in the layout catalog.
    Named { name: String },
    /// Layout carried in the config itself, e.g. loaded from JSON.
    Inline { layout: BuildingLayout },
}

/// A layout anchored at a horizontal position on the ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructurePlacement {
    pub layout: LayoutRef,
    /// Horizontal center of the structure.
    pub anchor_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingLayout {
    pub name: String,
    /// Rows of cell codes, top row first.
    pub grid: Vec<Vec<u8>>,
    #[serde(default)]
    pub objects: Vec<LayoutObject>,
    /// Declared cell codes. Code 0 is always empty and need not appear.
    #[serde(deserialize_with = "deserialize_cell_types")]
    pub cell_types: BTreeMap<u8, CellType>,
}

/// Overlay spanning `width × height` cells with its top-left at (`row`, `col`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutObject {
    pub kind: ObjectKind,
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Character,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellType {
    pub material: Material,
}

impl BuildingLayout {
    /// Parse a layout document. Structural checks happen at build time.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }
}

impl LayoutObject {
    /// Whether (`row`, `col`) lies inside this object's span.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }

    /// Whether two spans share at least one cell.
    pub fn overlaps(&self, other: &LayoutObject) -> bool {
        self.col < other.col + other.width
            && other.col < self.col + self.width
            && self.row < other.row + other.height
            && other.row < self.row + self.height
    }
}

/// JSON object keys are strings, and inside a tagged `LayoutRef` they
/// arrive buffered, so numeric codes are accepted in either form.
fn deserialize_cell_types<'de, D>(deserializer: D) -> Result<BTreeMap<u8, CellType>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(untagged)]
    enum Code {
        Number(u8),
        Text(String),
    }

    let raw = BTreeMap::<Code, CellType>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(code, cell_type)| {
            let code = match code {
                Code::Number(n) => n,
                Code::Text(text) => text.parse::<u8>().map_err(D::Error::custom)?,
            };
            Ok((code, cell_type))
        })
        .collect()
}
