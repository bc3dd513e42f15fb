use serde::{Deserialize, Serialize};
use std::fmt;

/// How a draw orders its picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrder {
    /// Weighted random with recency avoidance (uniform when weighting is off).
    #[default]
    Random,
    /// Round-robin continuation from the last pick still in the pool.
    Sequential,
    /// One uniform pick from each of `count` contiguous buckets.
    Group,
}

impl fmt::Display for SelectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "random",
            Self::Sequential => "sequential",
            Self::Group => "group",
        };
        f.write_str(name)
    }
}
