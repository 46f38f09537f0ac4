//! Exactsum Core - Exact IEEE-754 Oracle for Precise Summation
//!
//! Exactsum checks "precise summation" algorithms against ground truth. The
//! ground truth comes from an exact, bit-faithful bridge between binary64
//! doubles and arbitrary-precision integers: sum the integers, round once,
//! and you have the correctly rounded sum.
//!
//! ## Architecture
//! - **No approximation** anywhere in the oracle path
//! - **Pure bit operations** on `u64`, no shared scratch buffers
//! - **Seeded, fixed-entropy** random draws so every failure replays from its seed
//! - **Hard failures**: a divergence stops the run with the offending inputs
//!
//! ## Core Modules
//! - `core`: Bit codec (`parts`) and exact integer bridge (`bridge`)
//! - `generator`: Boundary-biased random doubles
//! - `oracle`: Reference sum, comparison protocol, fuzz loop
//! - `config`: Fuzz run parameters
//! - `utils`: Logging setup
//! - `testing`: Named boundary values and assertions

pub mod core;

pub mod config;
pub mod generator;
pub mod oracle;
pub mod testing;
pub mod utils;

// Re-export core types
pub use crate::core::{
    compose, decompose, from_exact_integer, to_exact_integer, Divergence, ExactInteger,
    FloatParts, FuzzError, InvalidInputError,
};

pub use config::FuzzConfig;
pub use generator::{random_float, FloatGenerator, RandomSource};
pub use oracle::{
    check_against_oracle, compare_with_oracle, reference_sum, FuzzReport, OracleFuzzer,
    Summation, Verdict,
};
pub use utils::init_logger;

// Re-export error types
pub use anyhow::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    // Bit codec and bridge
    pub use crate::core::{
        compose, decompose, from_exact_integer, to_exact_integer, ExactInteger, FloatParts,
    };

    // Generator
    pub use crate::generator::{random_float, FloatGenerator, RandomSource};

    // Oracle
    pub use crate::oracle::{
        check_against_oracle, reference_sum, ExactIntegerSum, NaiveSum, OracleFuzzer, Summation,
    };

    pub use crate::config::FuzzConfig;

    // Error types
    pub use crate::core::{FuzzError, InvalidInputError};
    pub use crate::{Error, Result};
}
