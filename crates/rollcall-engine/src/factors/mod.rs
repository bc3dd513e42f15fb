pub mod extreme_range;
pub mod frequency;
pub mod recency;
