use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Weight;

/// Persisted selection history: the log, lifetime counts and current weights.
///
/// Field names match the on-disk JSON layout (`history`, `nameFrequency`,
/// `nameProbabilities`, `lastUpdate`). Missing fields default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryState {
    /// Completed individual picks, oldest first.
    pub history: Vec<String>,
    /// Lifetime pick count per candidate.
    pub name_frequency: BTreeMap<String, u64>,
    /// Current sampling weight per candidate.
    pub name_probabilities: BTreeMap<String, Weight>,
    /// When the updater last touched this state. Diagnostic only: an
    /// unreadable value loads as `None` instead of rejecting the file.
    #[serde(deserialize_with = "lenient_timestamp")]
    pub last_update: Option<DateTime<Utc>>,
}

/// Offset-less layouts accepted for `lastUpdate`, read as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let text = raw.as_ref().and_then(serde_json::Value::as_str);
    Ok(text.and_then(parse_timestamp))
}

/// RFC 3339 first, then the offset-less layouts. `None` when nothing matches.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
            && self.name_frequency.is_empty()
            && self.name_probabilities.is_empty()
    }

    /// Sum of all lifetime counts.
    pub fn total_picks(&self) -> u64 {
        self.name_frequency.values().sum()
    }

    /// Number of distinct candidates with a non-zero lifetime count.
    pub fn distinct_picked(&self) -> usize {
        self.name_frequency.values().filter(|&&c| c > 0).count()
    }

    /// Lifetime count of a candidate; unseen candidates count 0.
    pub fn lifetime_count(&self, candidate: &str) -> u64 {
        self.name_frequency.get(candidate).copied().unwrap_or(0)
    }

    /// Stored weight, or the default for an unseen candidate.
    pub fn weight_of(&self, candidate: &str) -> f64 {
        self.name_probabilities
            .get(candidate)
            .copied()
            .unwrap_or_default()
            .value()
    }

    /// Store a weight, clamping it to the valid range.
    pub fn set_weight(&mut self, candidate: &str, value: f64) {
        self.name_probabilities
            .insert(candidate.to_string(), Weight::new(value));
    }

    /// The last `min(len, window)` log entries.
    pub fn recent_window(&self, window: usize) -> &[String] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }

    /// Append a pick to the log and evict the oldest entries beyond `capacity`.
    pub fn push_history(&mut self, candidate: &str, capacity: usize) {
        self.history.push(candidate.to_string());
        if self.history.len() > capacity {
            let excess = self.history.len() - capacity;
            self.history.drain(..excess);
        }
    }

    /// Bump a candidate's lifetime count and return the new value.
    pub fn increment_frequency(&mut self, candidate: &str) -> u64 {
        let count = self
            .name_frequency
            .entry(candidate.to_string())
            .or_insert(0);
        *count += 1;
        *count
    }

    /// Every candidate with a stored weight or a lifetime count.
    pub fn known_candidates(&self) -> BTreeSet<String> {
        self.name_probabilities
            .keys()
            .chain(self.name_frequency.keys())
            .cloned()
            .collect()
    }
}
