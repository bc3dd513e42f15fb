use serde::{Deserialize, Serialize};

use super::defaults;

/// History store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON history file.
    pub history_path: String,
    /// Maximum number of entries kept in the history log.
    pub history_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_path: defaults::DEFAULT_HISTORY_PATH.to_string(),
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
        }
    }
}
