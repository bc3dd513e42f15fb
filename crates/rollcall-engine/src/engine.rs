//! RollCallEngine: the two entry points consumed by UI collaborators.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rollcall_core::config::EngineConfig;
use rollcall_core::errors::RollCallResult;
use rollcall_core::tracing_setup::{DRAW_SPAN, RECORD_SPAN};
use rollcall_core::traits::IHistoryStore;
use rollcall_core::{HistoryState, SelectionOrder, WeightBreakdown};
use tracing::{debug, info, info_span, warn};

use crate::probability::ProbabilityEngine;
use crate::sampler;
use crate::strategies;
use crate::updater::HistoryUpdater;

/// Fair roll-call engine.
///
/// Draws read a snapshot of the injected store; `record_draw` mutates and
/// persists it under the store's lock.
pub struct RollCallEngine {
    store: Arc<dyn IHistoryStore>,
    probability: ProbabilityEngine,
    updater: HistoryUpdater,
}

impl RollCallEngine {
    pub fn new(store: Arc<dyn IHistoryStore>, config: EngineConfig) -> Self {
        Self {
            store,
            probability: ProbabilityEngine::new(config.clone()),
            updater: HistoryUpdater::new(config),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.probability.config()
    }

    pub fn store(&self) -> &Arc<dyn IHistoryStore> {
        &self.store
    }

    /// Select up to `count` distinct candidates from `pool`.
    ///
    /// Never fails: an empty pool or `count == 0` yields an empty list, and an
    /// unreadable store is treated as empty. The result may be shorter than
    /// `count`. Deterministic for a fixed `rng` seed and store state.
    pub fn select_candidates<R: Rng + ?Sized>(
        &self,
        pool: &[String],
        count: usize,
        order: SelectionOrder,
        rng: &mut R,
    ) -> Vec<String> {
        let span = info_span!(DRAW_SPAN, pool = pool.len(), count, order = %order);
        let _guard = span.enter();

        let pool = distinct(pool);
        if pool.is_empty() || count == 0 {
            debug!("nothing to draw");
            return Vec::new();
        }

        let mut state = self.snapshot_or_empty();
        let picked = match order {
            SelectionOrder::Random if self.config().weighting_enabled => {
                sampler::sample_weighted(&self.probability, &mut state, &pool, count, rng)
            }
            SelectionOrder::Random => sampler::sample_uniform(&pool, count, rng),
            SelectionOrder::Sequential => strategies::sequential(&state, &pool, count),
            SelectionOrder::Group => strategies::group(&pool, count, rng),
        };

        debug!(picked = ?picked, "draw complete");
        picked
    }

    /// Record a completed draw and persist it.
    ///
    /// Calling twice records two draws. Only a poisoned store lock fails;
    /// persistence errors are logged by the store.
    pub fn record_draw(&self, selected: &[String]) -> RollCallResult<()> {
        let span = info_span!(RECORD_SPAN, picks = selected.len());
        let _guard = span.enter();

        if selected.is_empty() {
            debug!("empty draw, nothing recorded");
            return Ok(());
        }

        let capacity = self.store.history_capacity();
        let now = Utc::now();
        let mut summary = None;
        self.store.update(&mut |state: &mut HistoryState| {
            summary = Some(self.updater.apply(state, selected, capacity, now));
        })?;

        if let Some(summary) = summary {
            info!(
                picks = summary.picks,
                recovered = summary.recovered,
                rebalanced = summary.rebalanced,
                "draw recorded"
            );
        }
        Ok(())
    }

    /// Discard all history and start from an empty store.
    pub fn clear_history(&self) -> RollCallResult<()> {
        self.store.clear()?;
        info!("history cleared");
        Ok(())
    }

    /// Factor-by-factor weight of a candidate against the current store.
    pub fn weight_breakdown(&self, candidate: &str) -> RollCallResult<WeightBreakdown> {
        let state = self.store.snapshot()?;
        Ok(self.probability.compute_breakdown(&state, candidate))
    }

    /// Current store contents.
    pub fn snapshot(&self) -> RollCallResult<HistoryState> {
        self.store.snapshot()
    }

    fn snapshot_or_empty(&self) -> HistoryState {
        self.store.snapshot().unwrap_or_else(|e| {
            warn!(error = %e, "history unavailable, drawing from empty state");
            HistoryState::new()
        })
    }
}

/// Drop repeated pool entries, keeping the first occurrence.
fn distinct(pool: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(pool.len());
    pool.iter()
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect()
}
