//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions. Gameplay state lives in the registry's
//! components and the stats ledger; systems reach both through a
//! `TickContext` borrowed from the engine for the duration of a call.

pub mod boundary;
pub mod cascade;
pub mod collision;
pub mod demolish;
pub mod effects;
pub mod launch;
pub mod snapshot;

use rand_chacha::ChaCha8Rng;

use demolition_core::config::GameConfig;
use demolition_core::events::GameEvent;
use demolition_core::ledger::{LedgerEntry, StatsLedger};
use demolition_physics::PhysicsWorld;

use crate::registry::Registry;
use crate::schedule::TaskQueue;

/// Mutable session state handed to systems.
pub struct TickContext<'a> {
    pub registry: &'a mut Registry,
    pub physics: &'a mut dyn PhysicsWorld,
    pub ledger: &'a mut StatsLedger,
    pub tasks: &'a mut TaskQueue,
    pub events: &'a mut Vec<GameEvent>,
    pub rng: &'a mut ChaCha8Rng,
    pub config: &'a GameConfig,
    pub tick: u64,
}

impl TickContext<'_> {
    pub fn record(&mut self, entry: LedgerEntry) {
        *self.ledger = self.ledger.apply(entry);
    }
}
