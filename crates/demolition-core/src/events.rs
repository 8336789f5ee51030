//! Events emitted by the simulation for audio and UI feedback.
//!
//! Entity ids are `hecs::Entity::to_bits()` values.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left the catapult.
    BombFired {
        projectile: u64,
        power: f64,
        angle_deg: f64,
        bombs_remaining: u32,
    },
    /// Fire rejected; shown as a disabled action.
    FireBlocked,
    /// Blast applied around a point.
    Explosion {
        x: f64,
        y: f64,
        radius: f64,
        origin: Option<u64>,
    },
    BlockDamaged {
        entity: u64,
        hit_count: u32,
        max_hits: u32,
        cause: DamageCause,
    },
    BlockDestroyed { entity: u64, cause: DamageCause },
    CharacterHit { entity: u64, health: i32 },
    CharacterDestroyed { entity: u64 },
    /// Swept after leaving the playfield.
    FellOffStage { entity: u64 },
    /// Fuse ran out under the expire policy.
    ProjectileExpired { projectile: u64 },
    /// Blocks cleared by the sandbox tool.
    Demolished { count: u32 },
    SessionReset,
}
