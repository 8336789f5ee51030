//! Session configuration.
//!
//! One struct covers every layout and tuning variant; nothing branches on
//! a preset name. All fields default, so a JSON document only needs the
//! values it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::FusePolicy;
use crate::error::ConfigError;
use crate::layout::{LayoutRef, StructurePlacement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub bomb_budget: u32,
    pub max_hits_per_block: u32,
    pub character_health: i32,
    /// Hit-count increment per projectile contact with a block.
    pub direct_hit_damage: u32,
    pub explosion_radius: f64,
    pub explosion_force: f64,
    pub cascade_delay_ticks: u64,
    pub detonation_delay_ticks: u64,
    pub fuse_policy: FusePolicy,
    pub sweep_interval_ticks: u64,
    pub out_of_bounds_margin: f64,
    pub power_range: PowerRange,
    pub launch_impulse_per_power: f64,
    /// Allowed launch angles; `None` allows the full circle.
    pub firing_arc: Option<FiringArc>,
    pub ground_segments: u32,
    pub row_wake_stagger_ticks: u64,
    /// Size of the primary tower in the default placement list.
    pub tower_width: u32,
    pub tower_height: u32,
    /// Explicit placements. `None` uses the two default towers.
    pub structures: Option<Vec<StructurePlacement>>,
    pub playfield: Playfield,
    pub gravity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerRange {
    pub min: f64,
    pub max: f64,
}

/// Inclusive angle interval in degrees. `min_deg` may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiringArc {
    pub min_deg: f64,
    pub max_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
    pub ground_y: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bomb_budget: BOMB_BUDGET,
            max_hits_per_block: MAX_HITS_PER_BLOCK,
            character_health: CHARACTER_HEALTH,
            direct_hit_damage: 1,
            explosion_radius: EXPLOSION_RADIUS,
            explosion_force: EXPLOSION_FORCE,
            cascade_delay_ticks: CASCADE_DELAY_TICKS,
            detonation_delay_ticks: DETONATION_DELAY_TICKS,
            fuse_policy: FusePolicy::default(),
            sweep_interval_ticks: SWEEP_INTERVAL_TICKS,
            out_of_bounds_margin: OUT_OF_BOUNDS_MARGIN,
            power_range: PowerRange {
                min: POWER_MIN,
                max: POWER_MAX,
            },
            launch_impulse_per_power: LAUNCH_IMPULSE_PER_POWER,
            firing_arc: None,
            ground_segments: 1,
            row_wake_stagger_ticks: ROW_WAKE_STAGGER_TICKS,
            tower_width: DEFAULT_TOWERS[0].1,
            tower_height: DEFAULT_TOWERS[0].2,
            structures: None,
            playfield: Playfield::default(),
            gravity: GRAVITY,
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_y: GROUND_SURFACE_Y,
        }
    }
}

impl Playfield {
    /// Whether a point lies more than `margin` outside the playfield.
    pub fn is_outside(&self, x: f64, y: f64, margin: f64) -> bool {
        x < -margin || x > self.width + margin || y < -margin || y > self.height + margin
    }
}

impl FiringArc {
    /// Whether an angle (any representation) falls inside the arc.
    pub fn contains(&self, angle_deg: f64) -> bool {
        let span = self.max_deg - self.min_deg;
        if span >= 360.0 {
            return true;
        }
        let offset = (angle_deg - self.min_deg).rem_euclid(360.0);
        offset <= span
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Structures to build on every session start and reset.
    pub fn placements(&self) -> Vec<StructurePlacement> {
        if let Some(structures) = &self.structures {
            return structures.clone();
        }
        let (primary_x, _, _) = DEFAULT_TOWERS[0];
        let (secondary_x, secondary_w, secondary_h) = DEFAULT_TOWERS[1];
        vec![
            StructurePlacement {
                layout: LayoutRef::Tower {
                    width: self.tower_width,
                    height: self.tower_height,
                },
                anchor_x: primary_x,
            },
            StructurePlacement {
                layout: LayoutRef::Tower {
                    width: secondary_w,
                    height: secondary_h,
                },
                anchor_x: secondary_x,
            },
        ]
    }

    /// Clamp power into the configured range.
    pub fn clamp_power(&self, power: f64) -> f64 {
        power.clamp(self.power_range.min, self.power_range.max)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.max_hits_per_block == 0 {
            return invalid("max_hits_per_block must be at least 1");
        }
        if self.character_health <= 0 {
            return invalid("character_health must be positive");
        }
        if self.direct_hit_damage == 0 {
            return invalid("direct_hit_damage must be at least 1");
        }
        if !non_negative(self.explosion_radius) || !non_negative(self.explosion_force) {
            return invalid("explosion radius and force must be non-negative");
        }
        if self.sweep_interval_ticks == 0 {
            return invalid("sweep_interval_ticks must be at least 1");
        }
        if !non_negative(self.out_of_bounds_margin) {
            return invalid("out_of_bounds_margin must be non-negative");
        }
        if self.power_range.min.is_nan()
            || self.power_range.max.is_nan()
            || self.power_range.min > self.power_range.max
        {
            return invalid("power_range.min must not exceed power_range.max");
        }
        if let Some(arc) = &self.firing_arc {
            if arc.min_deg.is_nan() || arc.min_deg > arc.max_deg {
                return invalid("firing_arc.min_deg must not exceed firing_arc.max_deg");
            }
        }
        if !non_negative(self.launch_impulse_per_power) {
            return invalid("launch_impulse_per_power must be non-negative");
        }
        if self.ground_segments == 0 {
            return invalid("ground_segments must be at least 1");
        }
        if !positive(self.playfield.width) || !positive(self.playfield.height) {
            return invalid("playfield must have a positive size");
        }
        if !non_negative(self.gravity) {
            return invalid("gravity must be non-negative");
        }
        Ok(())
    }
}

/// False for NaN and infinities.
fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
