//! Summation algorithms checked by the oracle
//!
//! The algorithm under test lives outside this crate and only has to
//! implement [`Summation`]. Two in-tree implementations exist to exercise
//! the harness: one that is known to agree with the oracle and one that
//! agrees only on short inputs.

use super::reference_sum;

/// An algorithm that sums doubles to a double
pub trait Summation {
    /// Sum the whole slice, returning one double
    fn sum(&self, values: &[f64]) -> f64;

    /// Algorithm name for logging
    fn name(&self) -> &'static str;
}

impl<F> Summation for F
where
    F: Fn(&[f64]) -> f64,
{
    fn sum(&self, values: &[f64]) -> f64 {
        self(values)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}

/// Left-to-right hardware addition starting from -0.0
///
/// Each `+` rounds, so only inputs of at most two elements are guaranteed
/// to be correctly rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSum;

impl Summation for NaiveSum {
    #[inline(always)]
    fn sum(&self, values: &[f64]) -> f64 {
        values.iter().fold(-0.0, |acc, &x| acc + x)
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

/// The oracle itself, run as an algorithm
///
/// Never diverges; useful as a self-check of the harness.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactIntegerSum;

impl Summation for ExactIntegerSum {
    fn sum(&self, values: &[f64]) -> f64 {
        reference_sum(values)
    }

    fn name(&self) -> &'static str {
        "exact-integer"
    }
}

/// Algorithm names accepted by [`by_name`]
pub const ALGORITHM_NAMES: [&str; 2] = ["naive", "exact-integer"];

/// Look up an in-tree algorithm by name
pub fn by_name(name: &str) -> Option<Box<dyn Summation>> {
    match name {
        "naive" => Some(Box::new(NaiveSum)),
        "exact" | "exact-integer" => Some(Box::new(ExactIntegerSum)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_empty_is_negative_zero() {
        let sum = NaiveSum.sum(&[]);
        assert_eq!(sum, 0.0);
        assert!(sum.is_sign_negative());
    }

    #[test]
    fn test_naive_keeps_single_value() {
        for value in [0.0, -0.0, 1.5, f64::MAX, f64::from_bits(1)] {
            assert_eq!(NaiveSum.sum(&[value]).to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_naive_loses_cancelled_digits() {
        assert_eq!(NaiveSum.sum(&[1e30, 0.1, -1e30]), 0.0);
        assert_eq!(ExactIntegerSum.sum(&[1e30, 0.1, -1e30]), 0.1);
    }

    #[test]
    fn test_closure_is_summation() {
        let first = |values: &[f64]| values.first().copied().unwrap_or(0.0);
        assert_eq!(first.sum(&[3.0, 4.0]), 3.0);
        assert_eq!(first.name(), "closure");
    }

    #[test]
    fn test_by_name() {
        for name in ALGORITHM_NAMES {
            let algorithm = by_name(name).unwrap();
            assert_eq!(algorithm.name(), name);
        }
        assert_eq!(by_name("exact").map(|a| a.name()), Some("exact-integer"));
        assert!(by_name("kahan").is_none());
    }
}
