/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight of a candidate that has never been seen.
pub const DEFAULT_PROBABILITY: f64 = 1.0;

/// Lower bound of every stored or computed weight.
pub const MIN_PROBABILITY: f64 = 0.01;

/// Upper bound of every stored or computed weight.
pub const MAX_PROBABILITY: f64 = DEFAULT_PROBABILITY * 10.0;

/// Floor for multiplicative reduction factors (recency, over-pick shrink).
pub const MIN_REDUCTION_FACTOR: f64 = MIN_PROBABILITY / DEFAULT_PROBABILITY;

/// Base multiplier applied to a candidate's weight right after it is picked.
/// Scaled by `1 + avoidance_weight` and by the frequency-based decay.
pub const BASE_PROBABILITY_DECAY_FACTOR: f64 = 0.5;

/// Ceiling of the post-pick decay multiplier; a pick always costs at least 15%.
pub const MAX_DECAY_MULTIPLIER: f64 = 0.85;

/// Additive recovery per draw for candidates absent from the recency window.
pub const PROBABILITY_RECOVERY_RATE: f64 = 0.2;

/// Strength of the quadratic boost given to under-picked candidates.
pub const FREQUENCY_BOOST_FACTOR: f64 = 2.0;

/// Shrink per unit of over-pick ratio above the average frequency.
pub const OVERPICK_SHRINK_RATE: f64 = 0.3;

/// Lifetime count spread at which weighted sampling is bypassed.
pub const EXTREME_RANGE_THRESHOLD: u64 = 3;

/// Maximum number of entries kept in the history log.
pub const HISTORY_LOG_CAPACITY: usize = 100;

/// Size of the synthetic numbered pool used when no roster exists.
pub const DEFAULT_SYNTHETIC_POOL_SIZE: usize = 60;
