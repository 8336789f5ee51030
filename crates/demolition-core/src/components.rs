//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Geometry of physical
//! entities is owned by the physics backend; these components are the
//! gameplay side-table joined to it through `PhysicsBody`.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::BodyHandle;

/// Catalog tag carried by every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMarker {
    pub kind: EntityKind,
}

/// Link to the physics backend's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub handle: BodyHandle,
}

/// Accumulated damage for blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durability {
    /// Damage events absorbed so far.
    pub hit_count: u32,
    /// Destruction threshold, fixed at creation.
    pub max_hits: u32,
    pub state: DamageState,
}

/// Health pool for characters, separate from `Durability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    /// Set on the first hit; the UI shows a health bar afterwards.
    pub show_bar: bool,
}

/// Lattice cell a structure entity was built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeCell {
    pub row: u32,
    pub col: u32,
}

/// Cosmetic appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub material: Material,
}

/// Launch record for a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub launched_at_tick: u64,
    pub power: f64,
    pub angle_deg: f64,
}

/// Expanding ring drawn around an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionRing {
    pub radius: f64,
    pub max_radius: f64,
    pub expansion_rate: f64,
}

/// Marks an effect entity as a burst particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle;

/// Remaining ticks before an effect entity despawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_ticks: u32,
}

// Position and Velocity from types.rs are used as components on effect
// entities, which live outside the physics backend.
