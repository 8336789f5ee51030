//! Snapshot system: queries the registry and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use demolition_core::components::*;
use demolition_core::enums::*;
use demolition_core::events::GameEvent;
use demolition_core::ledger::StatsLedger;
use demolition_core::state::*;
use demolition_core::types::{Position, SimTime};
use demolition_physics::PhysicsWorld;

use super::cascade::entity_id;
use crate::registry::Registry;

/// Build a complete GameStateSnapshot from the current session state.
pub fn build_snapshot(
    registry: &Registry,
    physics: &dyn PhysicsWorld,
    time: &SimTime,
    phase: GamePhase,
    ledger: &StatsLedger,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        stats: StatsView {
            score: ledger.score,
            blocks_destroyed: ledger.blocks_destroyed,
            bombs_remaining: ledger.bombs_remaining,
            bomb_budget: ledger.bomb_budget,
            explosions: ledger.explosions,
            game_started: phase == GamePhase::InProgress,
        },
        entities: build_entities(registry, physics),
        effects: build_effects(registry),
        events,
    }
}

/// Build EntityView list from every entity with a physics body.
fn build_entities(registry: &Registry, physics: &dyn PhysicsWorld) -> Vec<EntityView> {
    let mut views: Vec<EntityView> = registry
        .world
        .query::<(
            &EntityMarker,
            &PhysicsBody,
            Option<&Durability>,
            Option<&Health>,
            Option<&Appearance>,
            Option<&Projectile>,
        )>()
        .iter()
        .filter(|(entity, _)| !registry.is_destroyed(*entity))
        .filter_map(|(entity, (marker, body, durability, health, appearance, launch))| {
            let position = physics.position(body.handle)?;
            Some(EntityView {
                id: entity_id(entity),
                kind: marker.kind,
                position: Position::from(position),
                hit_count: durability.map_or(0, |d| d.hit_count),
                max_hits: durability.map_or(0, |d| d.max_hits),
                health: health.map(|h| h.current),
                damaged: durability.is_some_and(|d| d.state == DamageState::Damaged)
                    || health.is_some_and(|h| h.current < h.max),
                show_health_bar: health.is_some_and(|h| h.show_bar),
                material: appearance.map(|a| a.material),
                launch: launch.copied(),
            })
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

/// Build EffectView list from rings and particles.
fn build_effects(registry: &Registry) -> Vec<EffectView> {
    let mut views: Vec<(u64, EffectView)> = registry
        .world
        .query::<(&Position, &Lifetime, Option<&ExplosionRing>)>()
        .iter()
        .map(|(entity, (pos, lifetime, ring))| {
            let view = EffectView {
                kind: if ring.is_some() {
                    EffectKind::Ring
                } else {
                    EffectKind::Particle
                },
                position: *pos,
                radius: ring.map_or(0.0, |r| r.radius),
                remaining_ticks: lifetime.remaining_ticks,
            };
            (entity_id(entity), view)
        })
        .collect();

    views.sort_by_key(|(id, _)| *id);
    views.into_iter().map(|(_, view)| view).collect()
}
