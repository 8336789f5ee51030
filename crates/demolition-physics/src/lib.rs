//! Physics backend interface for the demolition simulation.
//!
//! The simulation never integrates motion or resolves contacts itself; it
//! talks to a `PhysicsWorld` through body handles and receives the pairs
//! of bodies that started touching during each step.
//! `KinematicWorld` is the bundled headless backend.

pub mod kinematic;

pub use demolition_core as core;
pub use kinematic::{Floor, KinematicWorld};

use demolition_core::types::BodyHandle;
use glam::DVec2;

/// Collision shape, centered on the body position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

/// Everything needed to insert a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    pub position: DVec2,
    pub shape: BodyShape,
    pub mass: f64,
    pub is_static: bool,
    /// Sensors never collide and never report contacts.
    pub is_sensor: bool,
}

/// Two bodies that started touching this step. `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactPair {
    pub a: BodyHandle,
    pub b: BodyHandle,
}

/// Operations the simulation needs from a rigid-body engine.
pub trait PhysicsWorld {
    fn add_body(&mut self, desc: BodyDesc) -> BodyHandle;

    /// Returns false if the handle was unknown.
    fn remove_body(&mut self, body: BodyHandle) -> bool;

    /// Instantaneous force (impulse) at a world-space point.
    fn apply_force(&mut self, body: BodyHandle, point: DVec2, force: DVec2);

    fn set_static(&mut self, body: BodyHandle, is_static: bool);

    fn position(&self, body: BodyHandle) -> Option<DVec2>;

    fn velocity(&self, body: BodyHandle) -> Option<DVec2>;

    fn body_count(&self) -> usize;

    /// Advance by `dt` seconds and return the contact pairs that began
    /// during this step, in a deterministic order.
    fn step(&mut self, dt: f64) -> Vec<ContactPair>;
}

impl BodyShape {
    /// Half extents of the axis-aligned bounding box.
    pub fn half_extents(&self) -> DVec2 {
        match *self {
            BodyShape::Circle { radius } => DVec2::splat(radius),
            BodyShape::Rect { width, height } => DVec2::new(width * 0.5, height * 0.5),
        }
    }
}
