//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the static fixtures (ground segments, catapult) once per
//! session and the destructible structures on every start and reset.

use glam::DVec2;
use hecs::Entity;

use demolition_core::components::*;
use demolition_core::config::GameConfig;
use demolition_core::constants::*;
use demolition_core::enums::*;
use demolition_core::error::BuildError;
use demolition_physics::{BodyDesc, BodyShape, PhysicsWorld};

use crate::registry::Registry;
use crate::schedule::{Task, TaskQueue};
use crate::structure::{self, EntitySpec};

/// Spawn ground segments across the playfield and the catapult.
pub fn spawn_fixtures(registry: &mut Registry, physics: &mut dyn PhysicsWorld, config: &GameConfig) {
    let field = config.playfield;
    let segments = config.ground_segments.max(1);
    let segment_width = field.width / f64::from(segments);

    for i in 0..segments {
        let desc = BodyDesc {
            position: DVec2::new(
                (f64::from(i) + 0.5) * segment_width,
                field.ground_y - GROUND_THICKNESS / 2.0,
            ),
            shape: BodyShape::Rect {
                width: segment_width,
                height: GROUND_THICKNESS,
            },
            mass: 0.0,
            is_static: true,
            is_sensor: false,
        };
        registry.spawn_body(physics, desc, (EntityMarker { kind: EntityKind::Ground },));
    }

    let desc = BodyDesc {
        position: catapult_position(config),
        shape: BodyShape::Rect {
            width: CATAPULT_SIZE,
            height: CATAPULT_SIZE,
        },
        mass: 0.0,
        is_static: true,
        is_sensor: false,
    };
    registry.spawn_body(physics, desc, (EntityMarker { kind: EntityKind::Catapult },));
}

pub fn catapult_position(config: &GameConfig) -> DVec2 {
    DVec2::new(CATAPULT_X, config.playfield.ground_y + CATAPULT_SIZE / 2.0)
}

/// Where projectiles appear.
pub fn launch_point(config: &GameConfig) -> DVec2 {
    catapult_position(config) + DVec2::new(LAUNCH_OFFSET.0, LAUNCH_OFFSET.1)
}

/// Build every configured structure. All placements are built and checked
/// for overlapping footprints before anything is spawned, so a bad
/// placement leaves the registry untouched. Rows start static and are
/// woken bottom-up from `now`.
pub fn build_structures(
    registry: &mut Registry,
    physics: &mut dyn PhysicsWorld,
    tasks: &mut TaskQueue,
    config: &GameConfig,
    now: u64,
) -> Result<usize, BuildError> {
    let ground = config.playfield.ground_y;
    let mut specs = Vec::new();
    let mut spans: Vec<Option<(f64, f64)>> = Vec::new();
    for (index, placement) in config.placements().iter().enumerate() {
        let built = structure::build(&placement.layout, placement.anchor_x, ground)?;
        let span = horizontal_span(&built);
        if let Some((left, right)) = span {
            let clash = spans
                .iter()
                .position(|s| matches!(s, Some((l, r)) if *l < right && left < *r));
            if let Some(first) = clash {
                return Err(BuildError::OverlappingPlacements {
                    first,
                    second: index,
                });
            }
        }
        spans.push(span);
        specs.extend(built);
    }

    let mut rows: Vec<Vec<Entity>> = Vec::new();
    for spec in &specs {
        let entity = spawn_structure_entity(registry, physics, spec, config);
        let row = spec.cell.row as usize;
        if rows.len() <= row {
            rows.resize_with(row + 1, Vec::new);
        }
        rows[row].push(entity);
    }

    for (row, members) in rows.into_iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        tasks.schedule(now + row as u64 * config.row_wake_stagger_ticks, Task::WakeRow { members });
    }

    log::info!("built {} structure entities", specs.len());
    Ok(specs.len())
}

/// Left and right edges covered by a built structure.
fn horizontal_span(specs: &[EntitySpec]) -> Option<(f64, f64)> {
    specs.iter().fold(None, |span, spec| {
        let left = spec.center.x - spec.width / 2.0;
        let right = spec.center.x + spec.width / 2.0;
        Some(match span {
            Some((l, r)) => (f64::min(l, left), f64::max(r, right)),
            None => (left, right),
        })
    })
}

fn spawn_structure_entity(
    registry: &mut Registry,
    physics: &mut dyn PhysicsWorld,
    spec: &EntitySpec,
    config: &GameConfig,
) -> Entity {
    let desc = BodyDesc {
        position: spec.center,
        shape: BodyShape::Rect {
            width: spec.width,
            height: spec.height,
        },
        mass: spec.mass,
        is_static: true,
        is_sensor: false,
    };
    let marker = EntityMarker { kind: spec.kind };
    let appearance = Appearance {
        material: spec.material,
    };

    match spec.kind {
        EntityKind::Character => registry.spawn_body(
            physics,
            desc,
            (
                marker,
                Health {
                    current: config.character_health,
                    max: config.character_health,
                    show_bar: false,
                },
                spec.cell,
                appearance,
            ),
        ),
        _ => registry.spawn_body(
            physics,
            desc,
            (
                marker,
                Durability {
                    hit_count: 0,
                    max_hits: config.max_hits_per_block,
                    state: DamageState::Intact,
                },
                spec.cell,
                appearance,
            ),
        ),
    }
}

/// Switch a structure row to dynamic. Members already gone are skipped.
pub fn wake_row(registry: &Registry, physics: &mut dyn PhysicsWorld, members: &[Entity]) {
    for &entity in members {
        if registry.is_destroyed(entity) {
            continue;
        }
        if let Some(handle) = registry.body_of(entity) {
            physics.set_static(handle, false);
        }
    }
}
