use chrono::{DateTime, Utc};
use rollcall_core::config::EngineConfig;
use rollcall_core::constants::{
    BASE_PROBABILITY_DECAY_FACTOR, DEFAULT_PROBABILITY, MAX_DECAY_MULTIPLIER, MIN_PROBABILITY,
    PROBABILITY_RECOVERY_RATE,
};
use rollcall_core::HistoryState;

use crate::factors::{frequency, recency};

/// Post-draw mutation of the history: closes the feedback loop.
#[derive(Debug, Clone, Default)]
pub struct HistoryUpdater {
    config: EngineConfig,
}

/// What one `apply` call changed, for logging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSummary {
    pub picks: usize,
    pub recovered: usize,
    pub rebalanced: usize,
}

impl HistoryUpdater {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Post-pick decay multiplier for a candidate whose count was just bumped.
    ///
    /// `min(0.85, 0.5 × (1 + avoidanceWeight) × frequencyDecay)`.
    pub fn decay_factor(&self, state: &HistoryState, candidate: &str) -> f64 {
        let frequency_decay = frequency::decay_modifier(state, candidate);
        let base = BASE_PROBABILITY_DECAY_FACTOR * (1.0 + self.config.avoidance_weight);
        (base * frequency_decay).min(MAX_DECAY_MULTIPLIER)
    }

    /// Record a completed draw into `state`.
    ///
    /// Per pick: log it, bump its count, decay its weight. Then recover
    /// candidates absent from the recency window, rebalance every known
    /// candidate by lifetime share, and stamp the time.
    pub fn apply(
        &self,
        state: &mut HistoryState,
        selected: &[String],
        capacity: usize,
        now: DateTime<Utc>,
    ) -> UpdateSummary {
        for candidate in selected {
            state.push_history(candidate, capacity);
            state.increment_frequency(candidate);

            let decay = self.decay_factor(state, candidate);
            let current = state.weight_of(candidate);
            state.set_weight(candidate, (current * decay).max(MIN_PROBABILITY));
        }

        let recovered = self.recover_absent(state);
        let rebalanced = self.rebalance(state);
        state.last_update = Some(now);

        UpdateSummary {
            picks: selected.len(),
            recovered,
            rebalanced,
        }
    }

    /// Candidates outside the recency window drift back toward the default.
    fn recover_absent(&self, state: &mut HistoryState) -> usize {
        let window = self.config.max_recent_history;
        let current: &HistoryState = state;
        let recovering: Vec<String> = current
            .name_probabilities
            .iter()
            .filter(|(name, weight)| {
                weight.is_below_default() && !recency::is_recent(current, name, window)
            })
            .map(|(name, _)| name.clone())
            .collect();

        for name in &recovering {
            let raised = state.weight_of(name) + PROBABILITY_RECOVERY_RATE;
            state.set_weight(name, raised.min(DEFAULT_PROBABILITY));
        }
        recovering.len()
    }

    /// Persist the frequency adjustment for every known candidate.
    fn rebalance(&self, state: &mut HistoryState) -> usize {
        let current: &HistoryState = state;
        let adjusted: Vec<(String, f64)> = current
            .known_candidates()
            .into_iter()
            .map(|name| {
                let weight = frequency::apply(current, &name, current.weight_of(&name));
                (name, weight)
            })
            .collect();

        let mut changed = 0;
        for (name, weight) in adjusted {
            if (state.weight_of(&name) - weight).abs() > f64::EPSILON {
                changed += 1;
            }
            state.set_weight(&name, weight);
        }
        changed
    }
}
