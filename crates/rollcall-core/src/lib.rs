//! # rollcall-core
//!
//! Foundation crate for the fair roll-call engine.
//! Defines the history data model, weights, config, errors, constants,
//! the history store trait and the candidate pool loader.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod pool;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{EngineConfig, RollCallConfig};
pub use errors::{RollCallError, RollCallResult};
pub use models::{HistoryState, SelectionOrder, Weight, WeightBreakdown};
pub use pool::CandidatePool;
pub use traits::IHistoryStore;
