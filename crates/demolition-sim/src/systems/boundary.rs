//! Boundary sweep: removes entities that left the playfield.
//!
//! Throttled to once every `sweep_interval_ticks`. Blocks that fell off
//! are credited as destructions at a lower score; projectiles are removed
//! without score and their fuse task later finds nothing to do.

use hecs::Entity;

use demolition_core::constants::SCORE_FELL_OFF;
use demolition_core::enums::EntityKind;
use demolition_core::events::GameEvent;
use demolition_core::ledger::LedgerEntry;

use super::cascade::{body_position, entity_id};
use super::TickContext;

/// Whether the sweep runs on this tick.
pub fn is_due(tick: u64, interval: u64) -> bool {
    interval > 0 && tick % interval == 0
}

fn is_outside(ctx: &TickContext, entity: Entity) -> bool {
    let margin = ctx.config.out_of_bounds_margin;
    body_position(ctx, entity).is_some_and(|p| ctx.config.playfield.is_outside(p.x, p.y, margin))
}

/// Sweep now. Returns the number of blocks credited as fallen.
pub fn run(ctx: &mut TickContext) -> u32 {
    let fallen: Vec<Entity> = ctx
        .registry
        .live_of_kind(EntityKind::Block)
        .into_iter()
        .filter(|&e| is_outside(ctx, e))
        .collect();

    for &block in &fallen {
        if !ctx.registry.mark_destroyed(block) {
            continue;
        }
        ctx.registry.despawn(ctx.physics, block);
        ctx.record(LedgerEntry::Destruction {
            points: SCORE_FELL_OFF,
        });
        ctx.events.push(GameEvent::FellOffStage {
            entity: entity_id(block),
        });
    }

    let strays: Vec<Entity> = ctx
        .registry
        .live_of_kind(EntityKind::Projectile)
        .into_iter()
        .filter(|&e| is_outside(ctx, e))
        .collect();
    for projectile in strays {
        ctx.registry.despawn(ctx.physics, projectile);
    }

    if !fallen.is_empty() {
        log::debug!("boundary sweep removed {} block(s)", fallen.len());
    }
    fallen.len() as u32
}
