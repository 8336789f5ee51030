//! Cosmetic effects: explosion rings and particle bursts.
//!
//! Effect entities live only in the hecs world (no physics body) and never
//! touch durability, health or the ledger.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;

use demolition_core::components::{EntityMarker, ExplosionRing, Lifetime, Particle};
use demolition_core::constants::*;
use demolition_core::enums::EntityKind;
use demolition_core::types::{Position, Velocity};

use super::TickContext;

const EFFECT_MARKER: EntityMarker = EntityMarker {
    kind: EntityKind::EffectMarker,
};

/// Ring that grows to `max_radius`, lingers, then despawns.
pub fn spawn_ring(ctx: &mut TickContext, center: DVec2, max_radius: f64) -> Entity {
    let expand_ticks = (max_radius * f64::from(TICK_RATE) / RING_EXPANSION_RATE).ceil() as u32;
    ctx.registry.world.spawn((
        EFFECT_MARKER,
        Position::from(center),
        ExplosionRing {
            radius: 0.0,
            max_radius,
            expansion_rate: RING_EXPANSION_RATE,
        },
        Lifetime {
            remaining_ticks: expand_ticks.saturating_add(RING_LINGER_TICKS),
        },
    ))
}

/// Particles flung outward at seeded random angles and speeds.
pub fn spawn_particle_burst(ctx: &mut TickContext, center: DVec2) {
    for _ in 0..CHARACTER_BURST_PARTICLES {
        let angle = ctx.rng.gen_range(0.0..TAU);
        let speed = ctx.rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        let velocity = DVec2::from_angle(angle) * speed;
        ctx.registry.world.spawn((
            EFFECT_MARKER,
            Particle,
            Position::from(center),
            Velocity::from(velocity),
            Lifetime {
                remaining_ticks: PARTICLE_LIFETIME_TICKS,
            },
        ));
    }
}

/// Advance rings and particles by one tick and despawn expired effects.
pub fn run(world: &mut World, gravity: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (_entity, ring) in world.query_mut::<&mut ExplosionRing>() {
        ring.radius = (ring.radius + ring.expansion_rate * DT).min(ring.max_radius);
    }

    for (_entity, (pos, vel, _particle)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Particle)>()
    {
        vel.y -= gravity * DT;
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }

    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.remaining_ticks = lifetime.remaining_ticks.saturating_sub(1);
        if lifetime.remaining_ticks == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
