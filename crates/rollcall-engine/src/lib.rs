//! # rollcall-engine
//!
//! Adaptive weighted selection for fair roll calls: recency dampening,
//! long-run frequency rebalancing, an extreme-imbalance override, and
//! random/sequential/group selection orders.

pub mod engine;
pub mod factors;
pub mod probability;
pub mod sampler;
pub mod strategies;
pub mod updater;

pub use engine::RollCallEngine;
pub use probability::ProbabilityEngine;
pub use updater::{HistoryUpdater, UpdateSummary};
