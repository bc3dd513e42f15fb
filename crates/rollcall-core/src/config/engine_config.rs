use serde::{Deserialize, Serialize};

use super::defaults;

/// Tunables of the probability engine and history updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// When false, random draws are plain uniform sampling without replacement.
    pub weighting_enabled: bool,
    /// Number of most recent log entries that count as "recent".
    pub max_recent_history: usize,
    /// Strength of recency dampening, in [0.0, 1.0].
    pub avoidance_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weighting_enabled: defaults::DEFAULT_WEIGHTING_ENABLED,
            max_recent_history: defaults::DEFAULT_MAX_RECENT_HISTORY,
            avoidance_weight: defaults::DEFAULT_AVOIDANCE_WEIGHT,
        }
    }
}

impl EngineConfig {
    /// Builder-style override of the recency window size.
    pub fn with_max_recent_history(mut self, window: usize) -> Self {
        self.max_recent_history = window;
        self
    }

    /// Builder-style override of the avoidance weight.
    pub fn with_avoidance_weight(mut self, weight: f64) -> Self {
        self.avoidance_weight = weight;
        self
    }

    /// Builder-style toggle for weighted sampling.
    pub fn with_weighting(mut self, enabled: bool) -> Self {
        self.weighting_enabled = enabled;
        self
    }
}
