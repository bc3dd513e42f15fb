use rollcall_core::constants::MIN_REDUCTION_FACTOR;
use rollcall_core::HistoryState;

/// Recency dampening factor.
///
/// Formula: `max(0.01, 1 - recentFrequency × avoidanceWeight)` where
/// `recentFrequency` is the candidate's share of the last
/// `min(len(log), window)` picks.
/// Range: 0.01 – 1.0. An empty window leaves the weight untouched.
pub fn calculate(
    state: &HistoryState,
    candidate: &str,
    window: usize,
    avoidance_weight: f64,
) -> f64 {
    let recent = state.recent_window(window);
    if recent.is_empty() {
        return 1.0;
    }

    let hits = recent.iter().filter(|name| *name == candidate).count();
    let recent_frequency = hits as f64 / recent.len() as f64;

    (1.0 - recent_frequency * avoidance_weight).max(MIN_REDUCTION_FACTOR)
}

/// True when the candidate appears in the recency window.
pub fn is_recent(state: &HistoryState, candidate: &str, window: usize) -> bool {
    state
        .recent_window(window)
        .iter()
        .any(|name| name.as_str() == candidate)
}
