//! Game Configuration
//!
//! Gameplay tuning for a world. Defaults reproduce the classic 800×600 board
//! with 50-unit cells, ten random walls and a single 3-second bomb.

use std::path::Path;
use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::core::vec2::IVec2;

/// Highest accepted tick rate (Hz). Keeps the tick interval at 1 ms or more.
pub const MAX_TICK_RATE: u32 = 1_000;

/// Largest accepted world side, in units.
pub const MAX_WORLD_EXTENT: i32 = 1 << 20;

/// Most walls a layout may generate.
pub const MAX_WALL_COUNT: u32 = 10_000;

/// Configuration loading / validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `GameConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but violate a constraint.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for world setup and simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation tick rate (Hz)
    pub tick_rate: u32,
    /// World width in units
    pub world_width: i32,
    /// World height in units
    pub world_height: i32,
    /// Grid cell size; also the side of every collision box
    pub cell_size: i32,
    /// Number of walls generated at setup
    pub wall_count: u32,
    /// Chance that a generated wall is destructible
    pub destructible_chance: f64,
    /// Player spawn position
    pub player_spawn: IVec2,
    /// Player movement per tick, in units
    pub player_speed: i32,
    /// Player life counter (no death rules consume it)
    pub player_lives: u32,
    /// Maximum simultaneous live bombs
    pub max_bombs: usize,
    /// Bomb fuse in seconds
    pub bomb_fuse_secs: f64,
    /// Explosion radius in cells
    pub explosion_radius: i32,
    /// How long an explosion stays on screen, in seconds
    pub explosion_duration_secs: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: crate::TICK_RATE,
            world_width: crate::WORLD_WIDTH,
            world_height: crate::WORLD_HEIGHT,
            cell_size: crate::CELL_SIZE,
            wall_count: 10,
            destructible_chance: 0.5,
            player_spawn: IVec2::new(50, 50),
            player_speed: 5,
            player_lives: 3,
            max_bombs: 1,
            bomb_fuse_secs: 3.0,
            explosion_radius: 1,
            explosion_duration_secs: 1.0,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check every constraint the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            return Err(ConfigError::Invalid(format!(
                "tick_rate ({}) must be within 1..={}",
                self.tick_rate, MAX_TICK_RATE
            )));
        }
        if self.cell_size <= 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        for (name, value) in [("world_width", self.world_width), ("world_height", self.world_height)] {
            if value < self.cell_size || value % self.cell_size != 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} ({}) must be a positive multiple of cell_size ({})",
                    name, value, self.cell_size
                )));
            }
            if value > MAX_WORLD_EXTENT {
                return Err(ConfigError::Invalid(format!(
                    "{} ({}) exceeds {}",
                    name, value, MAX_WORLD_EXTENT
                )));
            }
        }
        if self.wall_count > MAX_WALL_COUNT {
            return Err(ConfigError::Invalid(format!(
                "wall_count ({}) exceeds {}",
                self.wall_count, MAX_WALL_COUNT
            )));
        }
        if !(0.0..=1.0).contains(&self.destructible_chance) {
            return Err(ConfigError::Invalid(format!(
                "destructible_chance ({}) must be within [0, 1]",
                self.destructible_chance
            )));
        }
        // A step longer than a cell could tunnel through a wall
        if self.player_speed <= 0 || self.player_speed > self.cell_size {
            return Err(ConfigError::Invalid(format!(
                "player_speed ({}) must be within 1..=cell_size ({})",
                self.player_speed, self.cell_size
            )));
        }
        let arena = self.arena();
        if !arena.contains_x(self.player_spawn.x) || !arena.contains_y(self.player_spawn.y) {
            return Err(ConfigError::Invalid(format!(
                "player_spawn {} lies outside the world",
                self.player_spawn
            )));
        }
        if !(self.bomb_fuse_secs.is_finite() && self.bomb_fuse_secs > 0.0) {
            return Err(ConfigError::Invalid("bomb_fuse_secs must be positive".into()));
        }
        if !(self.explosion_duration_secs.is_finite() && self.explosion_duration_secs > 0.0) {
            return Err(ConfigError::Invalid("explosion_duration_secs must be positive".into()));
        }
        let max_radius = arena.columns().max(arena.rows());
        if !(0..=max_radius).contains(&self.explosion_radius) {
            return Err(ConfigError::Invalid(format!(
                "explosion_radius ({}) must be within 0..={} cells",
                self.explosion_radius, max_radius
            )));
        }
        Ok(())
    }

    /// Seconds elapsed per tick.
    #[inline]
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    /// Wall-clock interval between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.tick_rate.max(1) as u64)
    }

    /// Blast reach in units beyond the bomb's own cell.
    #[inline]
    pub fn blast_reach(&self) -> i32 {
        self.explosion_radius * self.cell_size
    }

    /// World extent used for movement clamping.
    #[inline]
    pub fn arena(&self) -> Arena {
        Arena {
            width: self.world_width,
            height: self.world_height,
            cell_size: self.cell_size,
        }
    }
}

/// World extent and cell size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arena {
    /// Width in units
    pub width: i32,
    /// Height in units
    pub height: i32,
    /// Cell size in units
    pub cell_size: i32,
}

impl Arena {
    /// Largest x a cell-sized box can take.
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.width - self.cell_size
    }

    /// Largest y a cell-sized box can take.
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.height - self.cell_size
    }

    /// Is `x` a legal left edge for a cell-sized box?
    #[inline]
    pub fn contains_x(&self, x: i32) -> bool {
        (0..=self.max_x()).contains(&x)
    }

    /// Is `y` a legal top edge for a cell-sized box?
    #[inline]
    pub fn contains_y(&self, y: i32) -> bool {
        (0..=self.max_y()).contains(&y)
    }

    /// Grid columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Grid rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }
}
