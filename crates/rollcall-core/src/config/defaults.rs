//! Compiled defaults for every tunable.

use crate::constants;

pub const DEFAULT_WEIGHTING_ENABLED: bool = true;
pub const DEFAULT_MAX_RECENT_HISTORY: usize = 30;
pub const DEFAULT_AVOIDANCE_WEIGHT: f64 = 0.9;

pub const DEFAULT_HISTORY_PATH: &str = "roll_call_history.json";
pub const DEFAULT_HISTORY_CAPACITY: usize = constants::HISTORY_LOG_CAPACITY;

pub const DEFAULT_FALLBACK_POOL_SIZE: usize = constants::DEFAULT_SYNTHETIC_POOL_SIZE;

pub const DEFAULT_LOG_LEVEL: &str = "info";
