//! Launch controller: turns (power, angle) into a projectile.

use glam::DVec2;
use hecs::Entity;

use demolition_core::components::{EntityMarker, Projectile};
use demolition_core::constants::*;
use demolition_core::enums::{EntityKind, FusePolicy};
use demolition_core::error::FireError;
use demolition_core::events::GameEvent;
use demolition_core::ledger::LedgerEntry;
use demolition_physics::{BodyDesc, BodyShape};

use super::cascade::entity_id;
use super::TickContext;
use crate::schedule::Task;
use crate::world_setup;

/// Impulse for a launch. Angle is in degrees, counter-clockwise from +x.
pub fn launch_force(power: f64, angle_deg: f64, impulse_per_power: f64) -> DVec2 {
    DVec2::from_angle(angle_deg.to_radians()) * power * impulse_per_power
}

/// Spawn and launch one projectile, then arm its fuse.
///
/// Fails without touching anything when no bombs remain, either input is
/// not finite, or the angle is outside a configured firing arc. Power is
/// clamped into range.
pub fn fire(ctx: &mut TickContext, power: f64, angle_deg: f64) -> Result<Entity, FireError> {
    if !ctx.ledger.can_fire() {
        return Err(FireError::Blocked);
    }
    if !power.is_finite() || !angle_deg.is_finite() {
        return Err(FireError::NonFinite {
            power,
            angle: angle_deg,
        });
    }
    if let Some(arc) = ctx.config.firing_arc {
        if !arc.contains(angle_deg) {
            return Err(FireError::OutsideFiringArc { angle: angle_deg });
        }
    }

    let power = ctx.config.clamp_power(power);
    let angle_deg = angle_deg.rem_euclid(360.0);
    let origin = world_setup::launch_point(ctx.config);

    let desc = BodyDesc {
        position: origin,
        shape: BodyShape::Circle {
            radius: PROJECTILE_RADIUS,
        },
        mass: PROJECTILE_MASS,
        is_static: false,
        is_sensor: false,
    };
    let projectile = ctx.registry.spawn_body(
        ctx.physics,
        desc,
        (
            EntityMarker {
                kind: EntityKind::Projectile,
            },
            Projectile {
                launched_at_tick: ctx.tick,
                power,
                angle_deg,
            },
        ),
    );

    if let Some(handle) = ctx.registry.body_of(projectile) {
        let force = launch_force(power, angle_deg, ctx.config.launch_impulse_per_power);
        ctx.physics.apply_force(handle, origin, force);
    }

    let due = ctx.tick + ctx.config.detonation_delay_ticks;
    let fuse = match ctx.config.fuse_policy {
        FusePolicy::Detonate => Task::Detonate { projectile },
        FusePolicy::Expire => Task::Expire { projectile },
    };
    ctx.tasks.schedule(due, fuse);

    ctx.record(LedgerEntry::BombLaunched);
    ctx.events.push(GameEvent::BombFired {
        projectile: entity_id(projectile),
        power,
        angle_deg,
        bombs_remaining: ctx.ledger.bombs_remaining,
    });
    log::debug!(
        "fired projectile {:?} power={:.1} angle={:.1} ({} left)",
        projectile,
        power,
        angle_deg,
        ctx.ledger.bombs_remaining
    );
    Ok(projectile)
}
