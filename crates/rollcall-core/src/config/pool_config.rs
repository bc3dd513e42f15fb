use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate pool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Roster file with one candidate per line. `None` means numbered pool.
    pub roster_path: Option<String>,
    /// Size of the synthetic `1..=n` pool used when no roster is available.
    pub fallback_size: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            fallback_size: defaults::DEFAULT_FALLBACK_POOL_SIZE,
        }
    }
}
