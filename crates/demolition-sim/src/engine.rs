//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity registry, the physics backend, the
//! stats ledger and the deferred task queue. It processes player commands,
//! runs all systems and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use demolition_core::commands::PlayerCommand;
use demolition_core::config::GameConfig;
use demolition_core::enums::GamePhase;
use demolition_core::error::{BuildError, FireError, SetupError};
use demolition_core::events::GameEvent;
use demolition_core::ledger::{LedgerEntry, StatsLedger};
use demolition_core::state::GameStateSnapshot;
use demolition_core::types::SimTime;
use demolition_physics::{Floor, KinematicWorld, PhysicsWorld};

use crate::registry::Registry;
use crate::schedule::{Task, TaskQueue};
use crate::systems::{self, cascade, TickContext};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the registry, physics and all sim state.
pub struct SimulationEngine<P: PhysicsWorld = KinematicWorld> {
    registry: Registry,
    physics: P,
    config: GameConfig,
    ledger: StatsLedger,
    tasks: TaskQueue,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine<KinematicWorld> {
    /// Create an engine on the bundled kinematic backend.
    pub fn new(config: SimConfig) -> Result<Self, SetupError> {
        let field = config.game.playfield;
        let physics = KinematicWorld::new(
            config.game.gravity,
            Some(Floor {
                y: field.ground_y,
                min_x: 0.0,
                max_x: field.width,
            }),
        );
        Self::with_physics(config, physics)
    }
}

impl<P: PhysicsWorld> SimulationEngine<P> {
    /// Create an engine on a caller-supplied physics backend. Validates the
    /// config, spawns fixtures and builds the structures.
    pub fn with_physics(config: SimConfig, physics: P) -> Result<Self, SetupError> {
        config.game.validate()?;

        let mut engine = Self {
            registry: Registry::new(),
            physics,
            ledger: StatsLedger::new(config.game.bomb_budget),
            config: config.game,
            tasks: TaskQueue::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };

        world_setup::spawn_fixtures(&mut engine.registry, &mut engine.physics, &engine.config);
        let built = world_setup::build_structures(
            &mut engine.registry,
            &mut engine.physics,
            &mut engine.tasks,
            &engine.config,
            0,
        )?;
        log::info!(
            "session ready: {} structure entities, {} bombs, seed {}",
            built,
            engine.ledger.bombs_remaining,
            config.seed
        );
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.registry,
            &self.physics,
            &self.time,
            self.phase,
            &self.ledger,
            events,
        )
    }

    /// Snapshot of the current state without advancing. Pending events stay queued.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.registry,
            &self.physics,
            &self.time,
            self.phase,
            &self.ledger,
            Vec::new(),
        )
    }

    /// Launch a projectile now. Moves the session to `InProgress`.
    pub fn fire(&mut self, power: f64, angle_deg: f64) -> Result<Entity, FireError> {
        let result = {
            let mut ctx = self.context();
            systems::launch::fire(&mut ctx, power, angle_deg)
        };
        match &result {
            Ok(_) => self.phase = GamePhase::InProgress,
            Err(FireError::Blocked) => self.events.push(GameEvent::FireBlocked),
            Err(_) => {}
        }
        result
    }

    /// Back to `NotStarted`: drop every non-static entity and pending task,
    /// rewind the ledger and rebuild the structures.
    pub fn reset(&mut self) -> Result<(), BuildError> {
        let removed = self.registry.clear_dynamic(&mut self.physics);
        self.tasks.clear();
        self.ledger = self.ledger.apply(LedgerEntry::Reset);
        self.time = SimTime::default();
        self.phase = GamePhase::NotStarted;
        self.events.push(GameEvent::SessionReset);

        let built = world_setup::build_structures(
            &mut self.registry,
            &mut self.physics,
            &mut self.tasks,
            &self.config,
            self.time.tick,
        )?;
        log::info!("session reset: removed {}, rebuilt {}", removed, built);
        Ok(())
    }

    /// Sandbox tool: clear blocks around a point. Returns how many were removed.
    pub fn demolish(&mut self, x: f64, y: f64) -> u32 {
        let mut ctx = self.context();
        systems::demolish::run(&mut ctx, DVec2::new(x, y))
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current ledger.
    pub fn stats(&self) -> StatsLedger {
        self.ledger
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.registry.world
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Force a block's damage counter (for tests that start mid-damage).
    #[cfg(test)]
    pub fn set_hit_count(&mut self, block: Entity, hit_count: u32) {
        if let Ok(mut durability) = self
            .registry
            .world
            .get::<&mut demolition_core::components::Durability>(block)
        {
            durability.hit_count = hit_count;
        }
    }

    /// Explode at a point as if a projectile detonated there.
    #[cfg(test)]
    pub fn detonate_at(&mut self, x: f64, y: f64) {
        let mut ctx = self.context();
        cascade::explode(&mut ctx, DVec2::new(x, y), None);
    }

    /// Feed a contact between two entities straight to the resolver.
    #[cfg(test)]
    pub fn resolve_contact(&mut self, a: Entity, b: Entity) {
        let mut ctx = self.context();
        systems::collision::resolve(&mut ctx, a, b);
    }

    /// Run the boundary sweep now, regardless of the throttle.
    #[cfg(test)]
    pub fn sweep_now(&mut self) -> u32 {
        let mut ctx = self.context();
        systems::boundary::run(&mut ctx)
    }

    /// Mutable access to the backend (tests move bodies around).
    #[cfg(test)]
    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    fn context(&mut self) -> TickContext<'_> {
        TickContext {
            registry: &mut self.registry,
            physics: &mut self.physics,
            ledger: &mut self.ledger,
            tasks: &mut self.tasks,
            events: &mut self.events,
            rng: &mut self.rng,
            config: &self.config,
            tick: self.time.tick,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire { power, angle } => {
                if let Err(err) = self.fire(power, angle) {
                    log::warn!("fire rejected: {err}");
                }
            }
            PlayerCommand::Reset => {
                if let Err(err) = self.reset() {
                    log::warn!("reset failed: {err}");
                }
            }
            PlayerCommand::Demolish { x, y } => {
                self.demolish(x, y);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Physics integration
        let contacts = self.physics.step(self.time.dt());

        let mut ctx = self.context();
        // 2. Contact dispatch
        systems::collision::run(&mut ctx, &contacts);
        // 3. Deferred tasks due this tick (fuses, cascade damage, row wake-up)
        run_due_tasks(&mut ctx);
        // 4. Throttled boundary sweep
        if systems::boundary::is_due(ctx.tick, ctx.config.sweep_interval_ticks) {
            systems::boundary::run(&mut ctx);
        }

        // 5. Cosmetic effects
        systems::effects::run(
            &mut self.registry.world,
            self.config.gravity,
            &mut self.despawn_buffer,
        );
    }
}

/// Drain every task due at or before the current tick, including tasks
/// scheduled while draining.
fn run_due_tasks(ctx: &mut TickContext) {
    while let Some(task) = ctx.tasks.pop_due(ctx.tick) {
        match task {
            Task::Detonate { projectile } => cascade::detonate_projectile(ctx, projectile),
            Task::Expire { projectile } => cascade::expire_projectile(ctx, projectile),
            Task::CascadeDamage { target } => cascade::apply_blast_damage(ctx, target),
            Task::WakeRow { members } => {
                world_setup::wake_row(ctx.registry, ctx.physics, &members);
            }
        }
    }
}
