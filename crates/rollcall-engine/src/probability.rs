use rollcall_core::config::EngineConfig;
use rollcall_core::{HistoryState, Weight, WeightBreakdown};

use crate::factors::{extreme_range, frequency, recency};

/// Per-candidate selection weight computation.
///
/// ```text
/// finalWeight = storedWeight
///   × recencyFactor      (recent picks are suppressed)
///   × frequencyFactor    (long-run share is pulled toward fair)
/// ```
///
/// Result is clamped to [0.01, 10.0]. The extreme-range override sits
/// beside this chain rather than inside it: when it fires, the weights are
/// not consulted at all for that pick.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityEngine {
    config: EngineConfig,
}

impl ProbabilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Stored weight, inserting the default for an unseen candidate.
    pub fn base_probability(&self, state: &mut HistoryState, candidate: &str) -> f64 {
        state
            .name_probabilities
            .entry(candidate.to_string())
            .or_insert_with(Weight::default)
            .value()
    }

    /// Dampen a weight by the candidate's share of the recency window.
    pub fn adjust_by_recent_history(
        &self,
        state: &HistoryState,
        candidate: &str,
        base: f64,
    ) -> f64 {
        base * recency::calculate(
            state,
            candidate,
            self.config.max_recent_history,
            self.config.avoidance_weight,
        )
    }

    /// Pull a weight toward the fair lifetime share.
    pub fn adjust_by_frequency(&self, state: &HistoryState, candidate: &str, weight: f64) -> f64 {
        frequency::apply(state, candidate, weight)
    }

    /// Final selection weight for one candidate.
    pub fn compute_weight(&self, state: &mut HistoryState, candidate: &str) -> f64 {
        let base = self.base_probability(state, candidate);
        let recent = self.adjust_by_recent_history(state, candidate, base);
        let adjusted = self.adjust_by_frequency(state, candidate, recent);
        Weight::new(adjusted).value()
    }

    /// Compute each factor individually for debugging/observability.
    /// Does not insert anything into `state`.
    pub fn compute_breakdown(&self, state: &HistoryState, candidate: &str) -> WeightBreakdown {
        let base = state.weight_of(candidate);
        let recent = self.adjust_by_recent_history(state, candidate, base);
        let adjusted = self.adjust_by_frequency(state, candidate, recent);
        let final_weight = Weight::new(adjusted).value();

        WeightBreakdown {
            candidate: candidate.to_string(),
            base_weight: base,
            recency_factor: recent / base,
            frequency_factor: if recent > 0.0 { adjusted / recent } else { 1.0 },
            final_weight,
        }
    }

    /// Indices of the least-picked pool members when lifetime counts have
    /// drifted too far apart; `None` when weighting applies.
    pub fn extreme_range_override(
        &self,
        state: &HistoryState,
        pool: &[String],
    ) -> Option<Vec<usize>> {
        extreme_range::least_picked(state, pool)
    }
}
