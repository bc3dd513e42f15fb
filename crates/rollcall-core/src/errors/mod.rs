//! Error handling for the roll-call engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod pool_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use pool_error::PoolError;
pub use store_error::StoreError;

/// Top-level error type. Every subsystem error converts into it.
#[derive(Debug, thiserror::Error)]
pub enum RollCallError {
    #[error("history store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("candidate pool error: {0}")]
    PoolError(#[from] PoolError),
}

/// Convenience alias used across the workspace.
pub type RollCallResult<T> = Result<T, RollCallError>;
