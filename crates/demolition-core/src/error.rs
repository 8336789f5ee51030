//! Error taxonomy.
//!
//! Policy no-ops (hitting an already destroyed entity, a fuse firing for a
//! projectile that is gone) are not errors and have no variant here.

use thiserror::Error;

/// Rejected launch. The world and ledger are left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FireError {
    #[error("no bombs remaining")]
    Blocked,
    #[error("angle {angle}° is outside the firing arc")]
    OutsideFiringArc { angle: f64 },
    #[error("power {power} and angle {angle} must both be finite")]
    NonFinite { power: f64, angle: f64 },
}

/// Structure instantiation failure. Raised before any entity is spawned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("unknown layout `{0}`")]
    UnknownLayout(String),
    #[error("layout `{0}` has an empty grid")]
    EmptyGrid(String),
    #[error("layout `{name}` row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        name: String,
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("object {index} in layout `{name}` does not fit inside the grid")]
    ObjectOutOfBounds { name: String, index: usize },
    #[error("objects {first} and {second} in layout `{name}` overlap")]
    OverlappingObjects {
        name: String,
        first: usize,
        second: usize,
    },
    #[error("layout `{name}` cell ({row}, {col}) uses undeclared code {code}")]
    UnknownCellType {
        name: String,
        row: usize,
        col: usize,
        code: u8,
    },
    #[error("tower must be at least 1x1, got {width}x{height}")]
    EmptyTower { width: u32, height: u32 },
    #[error("tower {width}x{height} exceeds {max} blocks")]
    TowerTooLarge { width: u32, height: u32, max: u32 },
    #[error("placements {first} and {second} overlap")]
    OverlappingPlacements { first: usize, second: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failure while creating a simulation session.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Build(#[from] BuildError),
}
