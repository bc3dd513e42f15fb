use rollcall_core::constants::EXTREME_RANGE_THRESHOLD;
use rollcall_core::HistoryState;

/// Fairness backstop against pathological drift.
///
/// When the lifetime counts within `pool` spread by at least
/// `EXTREME_RANGE_THRESHOLD`, returns the indices of the least-picked
/// candidates. The caller must then pick uniformly among them and ignore
/// every stored weight. Returns `None` when weighting should proceed.
pub fn least_picked(state: &HistoryState, pool: &[String]) -> Option<Vec<usize>> {
    let counts: Vec<u64> = pool.iter().map(|c| state.lifetime_count(c)).collect();
    let min = counts.iter().copied().min()?;
    let max = counts.iter().copied().max()?;

    if max - min < EXTREME_RANGE_THRESHOLD {
        return None;
    }

    Some(
        counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == min)
            .map(|(i, _)| i)
            .collect(),
    )
}
