//! Without-replacement draws: weighted (with the fairness backstop) and uniform.

use rand::seq::IndexedRandom;
use rand::Rng;
use rollcall_core::HistoryState;
use tracing::debug;

use crate::probability::ProbabilityEngine;

/// Draw `count` distinct candidates honoring the engine's weights.
///
/// Before every single pick the extreme-range override is checked; when it
/// fires the pick is uniform over the least-picked candidates. `state` is the
/// draw's snapshot and may gain default weights for unseen candidates.
pub fn sample_weighted<R: Rng + ?Sized>(
    engine: &ProbabilityEngine,
    state: &mut HistoryState,
    pool: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    if count >= pool.len() {
        return pool.to_vec();
    }

    let mut remaining: Vec<String> = pool.to_vec();
    let mut picked = Vec::with_capacity(count);

    for _ in 0..count {
        let index = if let Some(least) = engine.extreme_range_override(state, &remaining) {
            debug!(eligible = least.len(), "extreme range override");
            least[rng.random_range(0..least.len())]
        } else {
            let weights: Vec<f64> = remaining
                .iter()
                .map(|c| engine.compute_weight(state, c))
                .collect();
            match weighted_index(&weights, rng) {
                Some(i) => i,
                None => {
                    debug!(
                        candidates = remaining.len(),
                        "degenerate weights, uniform pick"
                    );
                    rng.random_range(0..remaining.len())
                }
            }
        };
        picked.push(remaining.swap_remove(index));
    }

    picked
}

/// Plain uniform draw without replacement.
pub fn sample_uniform<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    if count >= pool.len() {
        return pool.to_vec();
    }
    pool.choose_multiple(rng, count).cloned().collect()
}

/// Roulette-wheel selection over non-normalized weights.
///
/// Draws `r` uniformly in `[0, total)` and returns the first index whose
/// cumulative weight exceeds `r`. `None` when the total is zero, negative,
/// or not finite, or when rounding leaves no index past `r`.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }

    let r = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > r {
            return Some(i);
        }
    }
    None
}
