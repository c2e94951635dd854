//! Process settings from the environment.
//!
//! Gameplay tuning lives in [`GameConfig`]; these only decide how the binary
//! runs it. Unset or unparsable values fall back to defaults.

use std::env;
use std::path::PathBuf;

use crate::game::config::{ConfigError, GameConfig};

/// Path to a JSON `GameConfig`.
pub const ENV_CONFIG: &str = "BOMB_BLAST_CONFIG";
/// World seed.
pub const ENV_SEED: &str = "BOMB_BLAST_SEED";
/// Tick limit; 0 runs until quit.
pub const ENV_MAX_TICKS: &str = "BOMB_BLAST_MAX_TICKS";
/// Input script.
pub const ENV_SCRIPT: &str = "BOMB_BLAST_SCRIPT";
/// Pace at the tick rate (`true`/`false`, `1`/`0`).
pub const ENV_REALTIME: &str = "BOMB_BLAST_REALTIME";

/// Default world seed.
pub const DEFAULT_SEED: u64 = 12345;
/// Default tick limit (15 seconds at 60 Hz).
pub const DEFAULT_MAX_TICKS: u32 = 900;
/// Default input script: walk, bomb, take cover, wait it out.
pub const DEFAULT_SCRIPT: &str = "R*10 B L*10 D*20 .*240 R*30 B U*20 .*240";

/// How the binary runs a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Optional config file
    pub config_path: Option<PathBuf>,
    /// World seed
    pub seed: u64,
    /// Stop after this many ticks
    pub max_ticks: Option<u32>,
    /// Input script
    pub script: String,
    /// Pace at the tick rate
    pub realtime: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            config_path: None,
            seed: DEFAULT_SEED,
            max_ticks: Some(DEFAULT_MAX_TICKS),
            script: DEFAULT_SCRIPT.to_string(),
            realtime: true,
        }
    }
}

impl RunSettings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config_path = lookup(ENV_CONFIG)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let seed = lookup(ENV_SEED)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let max_ticks = match lookup(ENV_MAX_TICKS).and_then(|v| v.trim().parse::<u32>().ok()) {
            Some(0) => None,
            Some(n) => Some(n),
            None => defaults.max_ticks,
        };

        let script = lookup(ENV_SCRIPT).unwrap_or(defaults.script);

        let realtime = lookup(ENV_REALTIME)
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.realtime);

        Self {
            config_path,
            seed,
            max_ticks,
            script,
            realtime,
        }
    }

    /// Game config from the configured file, or defaults.
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        match &self.config_path {
            Some(path) => GameConfig::load(path),
            None => Ok(GameConfig::default()),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
