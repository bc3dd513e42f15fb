//! # rollcall-store
//!
//! Durable history of past draws: the pick log, lifetime counts and current
//! weights, kept in one JSON file and guarded by a single mutex.

pub mod persistence;
pub mod store;

pub use store::HistoryStore;
