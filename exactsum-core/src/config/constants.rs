//! Compile-time defaults for fuzz runs
//!
//! Runtime configuration starts from these values. The trial count can be
//! lowered at build time with Cargo features for quick CI runs.

// ===== TRIAL COUNT =====

/// Trials per fuzz run
/// Default: one million
#[cfg(not(any(feature = "trials-10k", feature = "trials-100k")))]
pub const DEFAULT_TRIALS: u64 = 1_000_000;
#[cfg(feature = "trials-10k")]
pub const DEFAULT_TRIALS: u64 = 10_000;
#[cfg(all(feature = "trials-100k", not(feature = "trials-10k")))]
pub const DEFAULT_TRIALS: u64 = 100_000;

// ===== REPORTING =====

/// Trials between progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

// ===== SEQUENCE SHAPES =====

/// Length of every input in pair mode
pub const PAIR_LEN: usize = 2;

/// Shortest input in sequence mode
pub const SEQUENCE_MIN_LEN: usize = 3;

/// Longest input in sequence mode
pub const SEQUENCE_MAX_LEN: usize = 10;
