//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Entity catalog. Every registry entity carries exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ground,
    Catapult,
    Projectile,
    Block,
    Character,
    /// Non-colliding visual marker (rings, particles).
    EffectMarker,
}

impl EntityKind {
    /// Static kinds are never moved by gravity or forces.
    pub fn is_static(self) -> bool {
        matches!(self, EntityKind::Ground | EntityKind::Catapult)
    }
}

/// Session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
}

/// Cosmetic damage state shown by the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageState {
    #[default]
    Intact,
    Damaged,
}

/// What happens when a projectile's fuse runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FusePolicy {
    /// Explode at the projectile's position, then remove it.
    #[default]
    Detonate,
    /// Remove the projectile without an explosion.
    Expire,
}

/// How a block took damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCause {
    DirectHit,
    Blast,
}

/// Cosmetic surface material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[default]
    BannerRed,
    BannerGold,
    Wall,
    Roof,
    Door,
}

/// Visual effect flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Ring,
    Particle,
}
