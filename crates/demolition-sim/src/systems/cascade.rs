//! Cascade explosion engine and the shared destruction primitives.
//!
//! Every path that destroys something (direct hit, blast damage, fuse,
//! boundary sweep) goes through the functions here, which consult the
//! destroyed-set first. An explosion pushes nearby blocks outward at once
//! and schedules one point of blast damage per block after
//! `cascade_delay_ticks`; a block that reaches its threshold explodes in
//! turn. Each block can be destroyed once, so the chain always ends.

use glam::DVec2;
use hecs::Entity;

use demolition_core::components::Durability;
use demolition_core::constants::*;
use demolition_core::enums::{DamageCause, DamageState, EntityKind};
use demolition_core::events::GameEvent;
use demolition_core::ledger::LedgerEntry;

use super::{effects, TickContext};
use crate::schedule::Task;

/// Stable id for events and snapshots.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Current body position of an entity, if it still has one.
pub fn body_position(ctx: &TickContext, entity: Entity) -> Option<DVec2> {
    let handle = ctx.registry.body_of(entity)?;
    ctx.physics.position(handle)
}

/// Blast centered on `center`. `origin` is the entity whose destruction
/// caused it, already in the destroyed-set.
pub fn explode(ctx: &mut TickContext, center: DVec2, origin: Option<Entity>) {
    let radius = ctx.config.explosion_radius;
    let force = ctx.config.explosion_force;

    ctx.record(LedgerEntry::Explosion);
    ctx.events.push(GameEvent::Explosion {
        x: center.x,
        y: center.y,
        radius,
        origin: origin.map(entity_id),
    });
    effects::spawn_ring(ctx, center, radius);

    let due = ctx.tick + ctx.config.cascade_delay_ticks;
    let mut caught = 0usize;
    for block in ctx.registry.live_of_kind(EntityKind::Block) {
        let Some(handle) = ctx.registry.body_of(block) else {
            continue;
        };
        let Some(position) = ctx.physics.position(handle) else {
            continue;
        };
        let offset = position - center;
        // Written so a NaN distance counts as outside.
        if !(offset.length() <= radius) {
            continue;
        }
        // Constant-magnitude radial push; a block at the center goes straight up.
        let direction = offset.try_normalize().unwrap_or(DVec2::Y);
        ctx.physics.apply_force(handle, position, direction * force);
        ctx.tasks.schedule(due, Task::CascadeDamage { target: block });
        caught += 1;
    }

    log::debug!(
        "explosion at ({:.1}, {:.1}) caught {} block(s)",
        center.x,
        center.y,
        caught
    );
}

/// Apply one point of delayed blast damage.
pub fn apply_blast_damage(ctx: &mut TickContext, target: Entity) {
    if ctx.registry.is_destroyed(target) {
        log::trace!("blast damage skipped: {:?} already destroyed", target);
        return;
    }
    let outcome = {
        let Ok(mut durability) = ctx.registry.world.get::<&mut Durability>(target) else {
            log::trace!("blast damage skipped: {:?} no longer exists", target);
            return;
        };
        durability.hit_count = durability.hit_count.saturating_add(1);
        if durability.hit_count >= durability.max_hits {
            None
        } else {
            durability.state = DamageState::Damaged;
            Some(*durability)
        }
    };

    match outcome {
        None => {
            destroy_block(ctx, target, DamageCause::Blast);
        }
        Some(durability) => {
            ctx.record(LedgerEntry::Damage {
                points: SCORE_BLAST_DAMAGE,
            });
            ctx.events.push(GameEvent::BlockDamaged {
                entity: entity_id(target),
                hit_count: durability.hit_count,
                max_hits: durability.max_hits,
                cause: DamageCause::Blast,
            });
        }
    }
}

/// Destroy a block: guard, score, remove, then explode where it stood.
/// Returns false if the block was already destroyed.
pub fn destroy_block(ctx: &mut TickContext, block: Entity, cause: DamageCause) -> bool {
    if !ctx.registry.mark_destroyed(block) {
        return false;
    }
    let center = body_position(ctx, block);

    ctx.record(LedgerEntry::Destruction {
        points: SCORE_BLOCK_DESTROYED,
    });
    ctx.events.push(GameEvent::BlockDestroyed {
        entity: entity_id(block),
        cause,
    });
    ctx.registry.despawn(ctx.physics, block);
    log::debug!("block {:?} destroyed by {:?}", block, cause);

    if let Some(center) = center {
        explode(ctx, center, Some(block));
    }
    true
}

/// Destroy a character: guard, score, particle burst, remove, explode.
pub fn destroy_character(ctx: &mut TickContext, character: Entity) -> bool {
    if !ctx.registry.mark_destroyed(character) {
        return false;
    }
    let center = body_position(ctx, character);

    ctx.record(LedgerEntry::Destruction {
        points: SCORE_CHARACTER_DESTROYED,
    });
    ctx.events.push(GameEvent::CharacterDestroyed {
        entity: entity_id(character),
    });
    ctx.registry.despawn(ctx.physics, character);
    log::debug!("character {:?} destroyed", character);

    if let Some(center) = center {
        effects::spawn_particle_burst(ctx, center);
        explode(ctx, center, Some(character));
    }
    true
}

/// Remove a projectile after its fuse. Under the detonate policy it
/// explodes at its current position first.
pub fn detonate_projectile(ctx: &mut TickContext, projectile: Entity) {
    let Some(center) = body_position(ctx, projectile) else {
        log::trace!("fuse skipped: projectile {:?} is gone", projectile);
        return;
    };
    ctx.registry.despawn(ctx.physics, projectile);
    log::debug!("projectile {:?} detonated", projectile);
    explode(ctx, center, None);
}

pub fn expire_projectile(ctx: &mut TickContext, projectile: Entity) {
    if ctx.registry.body_of(projectile).is_none() {
        log::trace!("fuse skipped: projectile {:?} is gone", projectile);
        return;
    }
    ctx.registry.despawn(ctx.physics, projectile);
    ctx.events.push(GameEvent::ProjectileExpired {
        projectile: entity_id(projectile),
    });
}
