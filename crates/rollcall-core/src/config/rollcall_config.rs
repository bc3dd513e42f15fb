//! Top-level configuration with 3-layer resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{EngineConfig, ObservabilityConfig, PoolConfig, StoreConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up by [`RollCallConfig::load`].
pub const CONFIG_FILE_NAME: &str = "rollcall.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ROLLCALL_*`)
/// 2. Project config (`rollcall.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RollCallConfig {
    pub engine: EngineConfig,
    pub store: StoreConfig,
    pub pool: PoolConfig,
    pub observability: ObservabilityConfig,
}

impl RollCallConfig {
    /// Load configuration for a project root.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a single TOML file, without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RollCallConfig) -> Result<(), ConfigError> {
        if config.engine.max_recent_history == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.max_recent_history".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.engine.avoidance_weight) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.avoidance_weight".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.store.history_capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "store.history_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.store.history_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "store.history_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.pool.fallback_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "pool.fallback_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the previous layer wins.
    fn apply_env_overrides(config: &mut RollCallConfig) {
        if let Some(v) = env_parsed::<bool>("ROLLCALL_WEIGHTING_ENABLED") {
            config.engine.weighting_enabled = v;
        }
        if let Some(v) = env_parsed::<usize>("ROLLCALL_MAX_RECENT_HISTORY") {
            config.engine.max_recent_history = v;
        }
        if let Some(v) = env_parsed::<f64>("ROLLCALL_AVOIDANCE_WEIGHT") {
            config.engine.avoidance_weight = v;
        }
        if let Ok(val) = std::env::var("ROLLCALL_HISTORY_PATH") {
            config.store.history_path = val;
        }
        if let Ok(val) = std::env::var("ROLLCALL_ROSTER_PATH") {
            config.pool.roster_path = Some(val);
        }
        if let Ok(val) = std::env::var("ROLLCALL_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable env override");
            None
        }
    }
}
