//! Configuration system for the roll-call engine.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod defaults;
pub mod engine_config;
pub mod observability_config;
pub mod pool_config;
pub mod rollcall_config;
pub mod store_config;

pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use pool_config::PoolConfig;
pub use rollcall_config::RollCallConfig;
pub use store_config::StoreConfig;
