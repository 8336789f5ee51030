//! Simulation engine for the demolition game.
//!
//! Owns the entity registry and the physics backend, runs systems at a
//! fixed tick rate, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod layouts;
pub mod registry;
pub mod schedule;
pub mod structure;
pub mod systems;
pub mod world_setup;

pub use demolition_core as core;
pub use demolition_physics as physics;
pub use engine::{SimConfig, SimulationEngine};
