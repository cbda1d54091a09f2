//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_2048_SEED` | clock-derived | Spawn RNG seed |
//! | `TUI_2048_LOG_PATH` | unset | Append a JSONL session log to this file |
//! | `TUI_2048_CELL_WIDTH` | 8 | Terminal columns per tile (8 to 32) |
//!
//! Unparseable values fall back to the default; empty strings count as unset.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::term::{MAX_CELL_WIDTH, MIN_CELL_WIDTH};

pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";
pub const ENV_CELL_WIDTH: &str = "TUI_2048_CELL_WIDTH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_path: Option<String>,
    pub cell_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            cell_width: MIN_CELL_WIDTH,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty(ENV_SEED)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty(ENV_LOG_PATH);

        let cell_width = non_empty(ENV_CELL_WIDTH)
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(MIN_CELL_WIDTH)
            .clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);

        Self {
            seed,
            log_path,
            cell_width,
        }
    }
}

/// Seed from the wall clock; different on every launch.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
