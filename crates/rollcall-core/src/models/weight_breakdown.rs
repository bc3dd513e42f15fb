use serde::{Deserialize, Serialize};

/// Each factor of a candidate's selection weight, for diagnostics.
///
/// ```text
/// final_weight = base_weight × recency_factor × frequency_factor
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    pub candidate: String,
    pub base_weight: f64,
    pub recency_factor: f64,
    pub frequency_factor: f64,
    pub final_weight: f64,
}
