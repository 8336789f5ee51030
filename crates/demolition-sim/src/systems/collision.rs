//! Collision classifier and damage resolver.
//!
//! Runs once per contact start reported by the physics backend. Only
//! projectile contacts with blocks or characters do anything; every other
//! pair is ignored.

use hecs::Entity;

use demolition_core::components::{Durability, Health};
use demolition_core::constants::*;
use demolition_core::enums::{DamageCause, DamageState, EntityKind};
use demolition_core::events::GameEvent;
use demolition_core::ledger::LedgerEntry;
use demolition_physics::ContactPair;

use super::cascade::{self, entity_id};
use super::TickContext;

/// What a contact between two kinds means for gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    DirectHit,
    CharacterHit,
    Ignored,
}

/// Classify an unordered pair of kinds.
pub fn classify(a: EntityKind, b: EntityKind) -> Interaction {
    match (a, b) {
        (EntityKind::Projectile, EntityKind::Block) | (EntityKind::Block, EntityKind::Projectile) => {
            Interaction::DirectHit
        }
        (EntityKind::Projectile, EntityKind::Character)
        | (EntityKind::Character, EntityKind::Projectile) => Interaction::CharacterHit,
        _ => Interaction::Ignored,
    }
}

/// Resolve every contact reported this step, in order.
pub fn run(ctx: &mut TickContext, contacts: &[ContactPair]) {
    for pair in contacts {
        let (Some(a), Some(b)) = (
            ctx.registry.entity_for_body(pair.a),
            ctx.registry.entity_for_body(pair.b),
        ) else {
            continue;
        };
        resolve(ctx, a, b);
    }
}

/// Resolve one contact between two entities.
pub fn resolve(ctx: &mut TickContext, a: Entity, b: Entity) {
    let (Some(kind_a), Some(kind_b)) = (ctx.registry.kind_of(a), ctx.registry.kind_of(b)) else {
        return;
    };
    let target = if kind_a == EntityKind::Projectile { b } else { a };

    match classify(kind_a, kind_b) {
        Interaction::Ignored => {}
        _ if ctx.registry.is_destroyed(target) => {
            log::trace!("contact with destroyed {:?} ignored", target);
        }
        Interaction::DirectHit => hit_block(ctx, target),
        Interaction::CharacterHit => hit_character(ctx, target),
    }
}

fn hit_block(ctx: &mut TickContext, block: Entity) {
    let damage = ctx.config.direct_hit_damage;
    let outcome = {
        let Ok(mut durability) = ctx.registry.world.get::<&mut Durability>(block) else {
            return;
        };
        durability.hit_count = durability.hit_count.saturating_add(damage);
        if durability.hit_count >= durability.max_hits {
            None
        } else {
            durability.state = DamageState::Damaged;
            Some(*durability)
        }
    };

    match outcome {
        None => {
            cascade::destroy_block(ctx, block, DamageCause::DirectHit);
        }
        Some(durability) => {
            ctx.record(LedgerEntry::Damage {
                points: SCORE_BLOCK_DAMAGED,
            });
            ctx.events.push(GameEvent::BlockDamaged {
                entity: entity_id(block),
                hit_count: durability.hit_count,
                max_hits: durability.max_hits,
                cause: DamageCause::DirectHit,
            });
        }
    }
}

fn hit_character(ctx: &mut TickContext, character: Entity) {
    let health = {
        let Ok(mut health) = ctx.registry.world.get::<&mut Health>(character) else {
            return;
        };
        health.current -= 1;
        health.show_bar = true;
        health.current
    };

    ctx.record(LedgerEntry::Damage {
        points: SCORE_CHARACTER_HIT,
    });
    ctx.events.push(GameEvent::CharacterHit {
        entity: entity_id(character),
        health,
    });

    if health <= 0 {
        cascade::destroy_character(ctx, character);
    }
}
