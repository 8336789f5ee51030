//! Sandbox demolish tool.

use glam::DVec2;
use hecs::Entity;

use demolition_core::constants::DEMOLISH_RADIUS;
use demolition_core::enums::EntityKind;
use demolition_core::events::GameEvent;

use super::cascade::body_position;
use super::TickContext;

/// Remove live blocks within `DEMOLISH_RADIUS` of a point. Fixtures and
/// characters are never touched and nothing is scored.
pub fn run(ctx: &mut TickContext, point: DVec2) -> u32 {
    let targets: Vec<Entity> = ctx
        .registry
        .live_of_kind(EntityKind::Block)
        .into_iter()
        .filter(|&e| body_position(ctx, e).is_some_and(|p| p.distance(point) <= DEMOLISH_RADIUS))
        .collect();

    let mut count = 0u32;
    for block in targets {
        if ctx.registry.mark_destroyed(block) {
            ctx.registry.despawn(ctx.physics, block);
            count += 1;
        }
    }

    ctx.events.push(GameEvent::Demolished { count });
    log::debug!("demolished {} block(s) at ({:.1}, {:.1})", count, point.x, point.y);
    count
}
