//! Domain-specific error types for the exact float bridge and the oracle fuzzer
//!
//! The bridge has exactly one failure kind: asking for the exact value of
//! something that has none. Fuzzing has one hard failure: a divergence from
//! the oracle, carried with everything needed to reproduce it.

use std::fmt;
use thiserror::Error;

/// Input has no exact finite value, or a raw field is outside its bit width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Value is NaN
    #[error("cannot take the exact value of NaN")]
    NotANumber,

    /// Value is infinite
    #[error("cannot take the exact value of {} infinity", sign_name(.positive))]
    Infinite {
        /// Whether it's positive or negative infinity
        positive: bool,
    },

    /// A raw IEEE-754 field does not fit in its bit width
    #[error("{field} field value {value:#x} does not fit in its bit width")]
    FieldOutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: u64,
    },
}

fn sign_name(positive: &bool) -> &'static str {
    if *positive {
        "positive"
    } else {
        "negative"
    }
}

/// One trial where the algorithm under test disagreed with the oracle
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    /// Name of the algorithm under test
    pub algorithm: &'static str,
    /// Seed of the run that produced the trial
    pub seed: u64,
    /// Zero-based index of the failing trial within the run
    pub trial: u64,
    /// Input sequence, in the order it was summed
    pub values: Vec<f64>,
    /// Oracle result
    pub expected: f64,
    /// Algorithm result
    pub actual: f64,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} diverged from the oracle at trial {} (seed {}): values {:?}, expected {:?}, got {:?}",
            self.algorithm, self.trial, self.seed, self.values, self.expected, self.actual
        )
    }
}

/// Errors that end a fuzz run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzError {
    /// The algorithm under test produced a result that is not bit-identical to the oracle
    #[error("{0}")]
    Divergence(Box<Divergence>),

    /// The run configuration was rejected before any trial ran
    #[error("invalid fuzz configuration: {0}")]
    InvalidConfig(String),
}

impl FuzzError {
    /// The divergence record, if this error is one
    pub fn divergence(&self) -> Option<&Divergence> {
        match self {
            FuzzError::Divergence(d) => Some(d),
            FuzzError::InvalidConfig(_) => None,
        }
    }
}

impl From<Divergence> for FuzzError {
    fn from(d: Divergence) -> Self {
        FuzzError::Divergence(Box::new(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let msg = format!("{}", InvalidInputError::NotANumber);
        assert!(msg.contains("NaN"));

        let msg = format!("{}", InvalidInputError::Infinite { positive: false });
        assert!(msg.contains("negative infinity"));

        let err = InvalidInputError::FieldOutOfRange {
            field: "exponent",
            value: 0x800,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("exponent"));
        assert!(msg.contains("0x800"));
    }

    #[test]
    fn test_divergence_display_is_reproducible() {
        let err = FuzzError::from(Divergence {
            algorithm: "naive",
            seed: 42,
            trial: 7,
            values: vec![1e30, 0.1, -1e30],
            expected: 0.1,
            actual: 0.0,
        });
        let msg = format!("{}", err);
        assert!(msg.contains("seed 42"));
        assert!(msg.contains("trial 7"));
        // Debug formatting of f64 is shortest round-trip, so values can be pasted back
        assert!(msg.contains("[1e30, 0.1, -1e30]"));
        assert_eq!(err.divergence().map(|d| d.trial), Some(7));
    }

    #[test]
    fn test_invalid_config_has_no_divergence() {
        let err = FuzzError::InvalidConfig("trials must be positive".to_string());
        assert!(err.divergence().is_none());
        assert!(format!("{}", err).contains("trials must be positive"));
    }
}
