//! Headless reference backend.
//!
//! Not a general rigid-body solver. Bodies sleep until pushed; awake
//! dynamic bodies fly ballistically and land on the highest support under
//! their footprint (another body's top face or the floor span). There is
//! no sideways resolution, so a moving body passes through others and the
//! overlap is reported once as a contact start. Removing a body wakes the
//! rest so anything left unsupported falls.

use std::collections::{BTreeMap, BTreeSet};

use demolition_core::types::BodyHandle;
use glam::DVec2;

use crate::{BodyDesc, BodyShape, ContactPair, PhysicsWorld};

/// Penetration depth below which shapes count as merely touching.
const CONTACT_EPSILON: f64 = 0.01;

/// Speed below which a landed body goes back to sleep.
const REST_SPEED: f64 = 5.0;

/// Horizontal velocity kept on each landing.
const LANDING_FRICTION: f64 = 0.8;

/// Horizontal support surface. Bodies beyond `min_x..=max_x` fall past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub y: f64,
    pub min_x: f64,
    pub max_x: f64,
}

#[derive(Debug, Clone)]
struct Body {
    position: DVec2,
    velocity: DVec2,
    shape: BodyShape,
    mass: f64,
    is_static: bool,
    is_sensor: bool,
    awake: bool,
}

pub struct KinematicWorld {
    bodies: BTreeMap<BodyHandle, Body>,
    next_handle: u64,
    gravity: f64,
    floor: Option<Floor>,
    touching: BTreeSet<ContactPair>,
}

impl KinematicWorld {
    pub fn new(gravity: f64, floor: Option<Floor>) -> Self {
        Self {
            bodies: BTreeMap::new(),
            next_handle: 1,
            gravity,
            floor,
            touching: BTreeSet::new(),
        }
    }

    /// Whether a body is currently simulated (not sleeping, not static).
    pub fn is_awake(&self, body: BodyHandle) -> bool {
        self.bodies
            .get(&body)
            .is_some_and(|b| b.awake && !b.is_static)
    }

    fn wake_all(&mut self) {
        for body in self.bodies.values_mut() {
            if !body.is_static && !body.is_sensor {
                body.awake = true;
            }
        }
    }

    /// Highest support top in `(new_bottom, old_bottom]` under the footprint.
    fn find_support(&self, handle: BodyHandle, body: &Body, new_pos: DVec2) -> Option<f64> {
        let half = body.shape.half_extents();
        let old_bottom = body.position.y - half.y;
        let new_bottom = new_pos.y - half.y;
        let (left, right) = (new_pos.x - half.x, new_pos.x + half.x);

        let mut best: Option<f64> = None;
        let mut consider = |top: f64| {
            if top <= old_bottom + CONTACT_EPSILON && top > new_bottom {
                best = Some(best.map_or(top, |b: f64| b.max(top)));
            }
        };

        if let Some(floor) = self.floor {
            if new_pos.x >= floor.min_x && new_pos.x <= floor.max_x {
                consider(floor.y);
            }
        }

        for (other_handle, other) in &self.bodies {
            if *other_handle == handle || other.is_sensor {
                continue;
            }
            let other_half = other.shape.half_extents();
            let overlap_x = right.min(other.position.x + other_half.x)
                - left.max(other.position.x - other_half.x);
            if overlap_x > CONTACT_EPSILON {
                consider(other.position.y + other_half.y);
            }
        }

        best
    }
}

impl PhysicsWorld for KinematicWorld {
    fn add_body(&mut self, desc: BodyDesc) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.bodies.insert(
            handle,
            Body {
                position: desc.position,
                velocity: DVec2::ZERO,
                shape: desc.shape,
                mass: desc.mass.max(f64::EPSILON),
                is_static: desc.is_static,
                is_sensor: desc.is_sensor,
                awake: false,
            },
        );
        handle
    }

    fn remove_body(&mut self, body: BodyHandle) -> bool {
        if self.bodies.remove(&body).is_none() {
            return false;
        }
        self.touching.retain(|pair| pair.a != body && pair.b != body);
        self.wake_all();
        true
    }

    fn apply_force(&mut self, body: BodyHandle, _point: DVec2, force: DVec2) {
        if let Some(b) = self.bodies.get_mut(&body) {
            if b.is_static {
                return;
            }
            b.velocity += force / b.mass;
            b.awake = true;
        }
    }

    fn set_static(&mut self, body: BodyHandle, is_static: bool) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.is_static = is_static;
            b.awake = !is_static;
            if is_static {
                b.velocity = DVec2::ZERO;
            }
        }
    }

    fn position(&self, body: BodyHandle) -> Option<DVec2> {
        self.bodies.get(&body).map(|b| b.position)
    }

    fn velocity(&self, body: BodyHandle) -> Option<DVec2> {
        self.bodies.get(&body).map(|b| b.velocity)
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn step(&mut self, dt: f64) -> Vec<ContactPair> {
        let moving: Vec<BodyHandle> = self
            .bodies
            .iter()
            .filter(|(_, b)| b.awake && !b.is_static && !b.is_sensor)
            .map(|(h, _)| *h)
            .collect();

        for handle in moving {
            let Some(body) = self.bodies.get(&handle) else {
                continue;
            };
            let mut velocity = body.velocity;
            velocity.y -= self.gravity * dt;
            let mut new_pos = body.position + velocity * dt;
            let mut landed = false;

            if velocity.y <= 0.0 {
                if let Some(top) = self.find_support(handle, body, new_pos) {
                    new_pos.y = top + body.shape.half_extents().y;
                    velocity.y = 0.0;
                    velocity.x *= LANDING_FRICTION;
                    landed = true;
                }
            }

            if let Some(body) = self.bodies.get_mut(&handle) {
                body.position = new_pos;
                body.velocity = velocity;
                if landed && velocity.length() < REST_SPEED {
                    body.velocity = DVec2::ZERO;
                    body.awake = false;
                }
            }
        }

        let current = self.overlapping_pairs();
        let started: Vec<ContactPair> = current.difference(&self.touching).copied().collect();
        if !started.is_empty() {
            log::trace!("{} contact(s) started", started.len());
        }
        self.touching = current;
        started
    }
}

impl KinematicWorld {
    fn overlapping_pairs(&self) -> BTreeSet<ContactPair> {
        let solids: Vec<(&BodyHandle, &Body)> =
            self.bodies.iter().filter(|(_, b)| !b.is_sensor).collect();

        let mut pairs = BTreeSet::new();
        for (i, (ha, a)) in solids.iter().enumerate() {
            for (hb, b) in &solids[i + 1..] {
                if a.is_static && b.is_static {
                    continue;
                }
                if overlaps(a, b) {
                    pairs.insert(ContactPair { a: **ha, b: **hb });
                }
            }
        }
        pairs
    }
}

fn overlaps(a: &Body, b: &Body) -> bool {
    match (a.shape, b.shape) {
        (BodyShape::Circle { radius: ra }, BodyShape::Circle { radius: rb }) => {
            a.position.distance(b.position) < ra + rb - CONTACT_EPSILON
        }
        (BodyShape::Circle { radius }, BodyShape::Rect { .. }) => {
            circle_rect_overlap(a.position, radius, b)
        }
        (BodyShape::Rect { .. }, BodyShape::Circle { radius }) => {
            circle_rect_overlap(b.position, radius, a)
        }
        (BodyShape::Rect { .. }, BodyShape::Rect { .. }) => {
            let ha = a.shape.half_extents();
            let hb = b.shape.half_extents();
            let delta = (a.position - b.position).abs();
            delta.x < ha.x + hb.x - CONTACT_EPSILON && delta.y < ha.y + hb.y - CONTACT_EPSILON
        }
    }
}

fn circle_rect_overlap(center: DVec2, radius: f64, rect: &Body) -> bool {
    let half = rect.shape.half_extents();
    let closest = center.clamp(rect.position - half, rect.position + half);
    center.distance(closest) < radius - CONTACT_EPSILON
}
