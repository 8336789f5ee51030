//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::components::Projectile;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub stats: StatsView,
    pub entities: Vec<EntityView>,
    pub effects: Vec<EffectView>,
    pub events: Vec<GameEvent>,
}

/// Running score for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    pub score: u64,
    pub blocks_destroyed: u32,
    pub bombs_remaining: u32,
    pub bomb_budget: u32,
    pub explosions: u32,
    pub game_started: bool,
}

/// A physical entity as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u64,
    pub kind: EntityKind,
    pub position: Position,
    /// Block damage counters (zero for other kinds).
    pub hit_count: u32,
    pub max_hits: u32,
    /// Character health (`None` for other kinds).
    pub health: Option<i32>,
    pub damaged: bool,
    pub show_health_bar: bool,
    pub material: Option<Material>,
    /// Launch record (projectiles only).
    pub launch: Option<Projectile>,
}

/// A cosmetic effect entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Position,
    /// Current ring radius (zero for particles).
    pub radius: f64,
    pub remaining_ticks: u32,
}
