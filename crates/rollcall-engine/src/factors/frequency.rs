use rollcall_core::constants::{
    FREQUENCY_BOOST_FACTOR, MAX_PROBABILITY, MIN_REDUCTION_FACTOR, OVERPICK_SHRINK_RATE,
};
use rollcall_core::HistoryState;

/// Lifetime share of a candidate relative to the fair share.
///
/// Returns `(nameFrequency, averageFrequency)` or `None` before any pick.
/// `averageFrequency` is `1 / distinct candidates ever picked`.
pub fn shares(state: &HistoryState, candidate: &str) -> Option<(f64, f64)> {
    let total = state.total_picks();
    let distinct = state.distinct_picked();
    if total == 0 || distinct == 0 {
        return None;
    }
    let name_frequency = state.lifetime_count(candidate) as f64 / total as f64;
    let average_frequency = 1.0 / distinct as f64;
    Some((name_frequency, average_frequency))
}

/// Shrink factor for an over-picked candidate: `max(0.01, 1 - (ratio - 1) × 0.3)`.
pub fn overpick_factor(ratio: f64) -> f64 {
    (1.0 - (ratio - 1.0) * OVERPICK_SHRINK_RATE).max(MIN_REDUCTION_FACTOR)
}

/// Boost factor for an under-picked candidate: `1 + 2 × gap²`.
pub fn underpick_factor(gap: f64) -> f64 {
    1.0 + FREQUENCY_BOOST_FACTOR * gap * gap
}

/// Long-run frequency balancing factor.
///
/// Under-picked candidates are boosted quadratically in their gap to the fair
/// share, over-picked ones shrink linearly in their excess ratio.
/// Range: 0.01 – 3.0.
pub fn calculate(state: &HistoryState, candidate: &str) -> f64 {
    let Some((name_frequency, average_frequency)) = shares(state, candidate) else {
        return 1.0;
    };

    if name_frequency < average_frequency {
        underpick_factor(1.0 - name_frequency / average_frequency)
    } else if name_frequency > average_frequency {
        overpick_factor(name_frequency / average_frequency)
    } else {
        1.0
    }
}

/// Apply the frequency factor to a weight, capping boosts at the max weight.
pub fn apply(state: &HistoryState, candidate: &str, weight: f64) -> f64 {
    (weight * calculate(state, candidate)).min(MAX_PROBABILITY)
}

/// Extra damping of the post-pick decay for over-picked candidates.
/// Range: 0.01 – 1.0.
pub fn decay_modifier(state: &HistoryState, candidate: &str) -> f64 {
    match shares(state, candidate) {
        Some((name_frequency, average_frequency)) if name_frequency > average_frequency => {
            overpick_factor(name_frequency / average_frequency)
        }
        _ => 1.0,
    }
}
