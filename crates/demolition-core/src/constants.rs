//! Simulation constants and tuning defaults.
//!
//! Values that vary between difficulty presets live in `GameConfig`;
//! these are the defaults it starts from plus the fixed geometry.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Playfield width in world units.
pub const PLAYFIELD_WIDTH: f64 = 1000.0;

/// Playfield height in world units.
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

/// Height of the ground surface above the bottom edge.
pub const GROUND_SURFACE_Y: f64 = 100.0;

/// Thickness of the ground slab below the surface.
pub const GROUND_THICKNESS: f64 = 80.0;

/// Downward acceleration (units/s²).
pub const GRAVITY: f64 = 400.0;

// --- Catapult / launch ---

/// Catapult center x.
pub const CATAPULT_X: f64 = 150.0;

/// Catapult footprint (square).
pub const CATAPULT_SIZE: f64 = 100.0;

/// Launch point offset from the catapult center.
pub const LAUNCH_OFFSET: (f64, f64) = (0.0, 75.0);

/// Bombs available per session.
pub const BOMB_BUDGET: u32 = 5;

/// Minimum launch power.
pub const POWER_MIN: f64 = 10.0;

/// Maximum launch power.
pub const POWER_MAX: f64 = 100.0;

/// Impulse (units/s per unit mass) per point of power.
pub const LAUNCH_IMPULSE_PER_POWER: f64 = 10.0;

/// Projectile radius.
pub const PROJECTILE_RADIUS: f64 = 15.0;

/// Projectile mass.
pub const PROJECTILE_MASS: f64 = 1.0;

/// Ticks between launch and fuse expiry (3 seconds).
pub const DETONATION_DELAY_TICKS: u64 = 3 * TICK_RATE as u64;

// --- Structures ---

/// Procedural tower block footprint.
pub const BLOCK_WIDTH: f64 = 30.0;
pub const BLOCK_HEIGHT: f64 = 20.0;

/// Largest procedural tower, in blocks.
pub const MAX_TOWER_BLOCKS: u32 = 4096;

/// Named-layout lattice cell size (square).
pub const LAYOUT_CELL_SIZE: f64 = 25.0;

/// Block mass.
pub const BLOCK_MASS: f64 = 1.0;

/// Default hits before a block is destroyed.
pub const MAX_HITS_PER_BLOCK: u32 = 4;

/// Default character health budget.
pub const CHARACTER_HEALTH: i32 = 5;

/// Character mass per lattice cell it covers.
pub const CHARACTER_MASS_PER_CELL: f64 = 0.5;

/// Ticks between successive rows switching from static to dynamic.
pub const ROW_WAKE_STAGGER_TICKS: u64 = 3;

/// Default tower placements: (anchor x, width, height).
pub const DEFAULT_TOWERS: [(f64, u32, u32); 2] = [(700.0, 4, 8), (850.0, 3, 6)];

// --- Explosions ---

/// Default blast radius.
pub const EXPLOSION_RADIUS: f64 = 100.0;

/// Default radial impulse magnitude.
pub const EXPLOSION_FORCE: f64 = 150.0;

/// Delay between a destruction and its secondary damage (~117 ms).
pub const CASCADE_DELAY_TICKS: u64 = 7;

/// Expanding ring growth rate (units/s).
pub const RING_EXPANSION_RATE: f64 = 600.0;

/// Ticks a ring lingers after reaching full size.
pub const RING_LINGER_TICKS: u32 = 20;

/// Particles emitted when a character is destroyed.
pub const CHARACTER_BURST_PARTICLES: u32 = 12;

/// Particle speed range (units/s).
pub const PARTICLE_SPEED_MIN: f64 = 80.0;
pub const PARTICLE_SPEED_MAX: f64 = 220.0;

/// Particle lifetime.
pub const PARTICLE_LIFETIME_TICKS: u32 = 45;

// --- Boundary sweep ---

/// Ticks between boundary sweeps.
pub const SWEEP_INTERVAL_TICKS: u64 = 60;

/// Distance outside the playfield before an entity counts as fallen off.
pub const OUT_OF_BOUNDS_MARGIN: f64 = 100.0;

// --- Sandbox demolish tool ---

/// Radius of the demolish tool.
pub const DEMOLISH_RADIUS: f64 = 30.0;

// --- Scoring ---

/// Direct hit that damages but does not destroy a block.
pub const SCORE_BLOCK_DAMAGED: u64 = 2;

/// Block destroyed, by direct hit or cascade.
pub const SCORE_BLOCK_DESTROYED: u64 = 15;

/// Blast damage that does not destroy a block.
pub const SCORE_BLAST_DAMAGE: u64 = 1;

/// Projectile contact with a character.
pub const SCORE_CHARACTER_HIT: u64 = 10;

/// Character destroyed.
pub const SCORE_CHARACTER_DESTROYED: u64 = 50;

/// Block swept after leaving the playfield.
pub const SCORE_FELL_OFF: u64 = 5;
