//! Entity registry: the gameplay side-table joined to the physics backend.
//!
//! The hecs world holds gameplay components; the physics backend holds
//! geometry. `bodies` maps a backend handle back to its entity so contact
//! pairs can be resolved, and `destroyed` is the at-most-once destruction
//! guard every damage path consults.

use std::collections::{HashMap, HashSet};

use hecs::{DynamicBundle, Entity, EntityBuilder, World};

use demolition_core::components::{EntityMarker, PhysicsBody};
use demolition_core::enums::EntityKind;
use demolition_core::types::BodyHandle;
use demolition_physics::{BodyDesc, PhysicsWorld};

#[derive(Default)]
pub struct Registry {
    pub world: World,
    bodies: HashMap<BodyHandle, Entity>,
    destroyed: HashSet<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body to the backend and spawn its gameplay entity.
    pub fn spawn_body(
        &mut self,
        physics: &mut dyn PhysicsWorld,
        desc: BodyDesc,
        components: impl DynamicBundle,
    ) -> Entity {
        let handle = physics.add_body(desc);
        let mut builder = EntityBuilder::new();
        builder.add_bundle(components).add(PhysicsBody { handle });
        let entity = self.world.spawn(builder.build());
        self.bodies.insert(handle, entity);
        entity
    }

    pub fn entity_for_body(&self, handle: BodyHandle) -> Option<Entity> {
        self.bodies.get(&handle).copied()
    }

    pub fn body_of(&self, entity: Entity) -> Option<BodyHandle> {
        self.world.get::<&PhysicsBody>(entity).ok().map(|b| b.handle)
    }

    pub fn kind_of(&self, entity: Entity) -> Option<EntityKind> {
        self.world.get::<&EntityMarker>(entity).ok().map(|m| m.kind)
    }

    pub fn is_destroyed(&self, entity: Entity) -> bool {
        self.destroyed.contains(&entity)
    }

    /// Add to the destroyed-set. Returns false if it was already there.
    pub fn mark_destroyed(&mut self, entity: Entity) -> bool {
        self.destroyed.insert(entity)
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed.len()
    }

    /// Remove an entity and its body, if it has one.
    pub fn despawn(&mut self, physics: &mut dyn PhysicsWorld, entity: Entity) {
        if let Some(handle) = self.body_of(entity) {
            physics.remove_body(handle);
            self.bodies.remove(&handle);
        }
        let _ = self.world.despawn(entity);
    }

    /// Remove every entity whose kind is not static (ground and catapult
    /// survive) and forget the destroyed-set.
    pub fn clear_dynamic(&mut self, physics: &mut dyn PhysicsWorld) -> usize {
        let doomed: Vec<Entity> = self
            .world
            .query::<&EntityMarker>()
            .iter()
            .filter(|(_, marker)| !marker.kind.is_static())
            .map(|(entity, _)| entity)
            .collect();

        for &entity in &doomed {
            self.despawn(physics, entity);
        }
        self.destroyed.clear();
        doomed.len()
    }

    /// Live entities of one kind, sorted for deterministic iteration.
    pub fn live_of_kind(&self, kind: EntityKind) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .world
            .query::<&EntityMarker>()
            .iter()
            .filter(|(entity, marker)| marker.kind == kind && !self.destroyed.contains(entity))
            .map(|(entity, _)| entity)
            .collect();
        entities.sort();
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demolition_physics::{BodyShape, KinematicWorld};
    use glam::DVec2;

    #[test]
    fn spawned_entity_is_joined_to_its_body() {
        let mut physics = KinematicWorld::new(0.0, None);
        let mut registry = Registry::new();
        let desc = BodyDesc {
            position: DVec2::new(10.0, 20.0),
            shape: BodyShape::Circle { radius: 1.0 },
            mass: 1.0,
            is_static: false,
            is_sensor: false,
        };
        let entity = registry.spawn_body(
            &mut physics,
            desc,
            (EntityMarker {
                kind: EntityKind::Projectile,
            },),
        );

        let handle = registry.body_of(entity).unwrap();
        assert_eq!(registry.entity_for_body(handle), Some(entity));
        assert_eq!(registry.kind_of(entity), Some(EntityKind::Projectile));
        assert_eq!(physics.body_count(), 1);

        registry.despawn(&mut physics, entity);
        assert_eq!(registry.entity_for_body(handle), None);
        assert_eq!(physics.body_count(), 0);
    }
}
