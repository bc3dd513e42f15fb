//! Subscriber installation for binaries and test harnesses.
//!
//! Library code only emits `tracing` events; the host decides where they go.

use tracing_subscriber::EnvFilter;

/// Span name wrapping each selection request.
pub const DRAW_SPAN: &str = "rollcall.draw";
/// Span name wrapping each history update.
pub const RECORD_SPAN: &str = "rollcall.record";

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Returns false when a
/// subscriber was already installed.
pub fn init_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Same as [`init_tracing`] but emits newline-delimited JSON.
pub fn init_json_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
