//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Launch a projectile. `angle` is in degrees, counter-clockwise from +x.
    Fire { power: f64, angle: f64 },
    /// Return to NotStarted and rebuild the structures.
    Reset,
    /// Sandbox tool: clear blocks around a point.
    Demolish { x: f64, y: f64 },
}
