//! Ground-truth summation and the oracle comparison protocol
//!
//! [`reference_sum`] adds doubles as exact integers and rounds once, so its
//! result is the correctly rounded sum. Any algorithm claiming to be
//! precise must match it bit for bit.

pub mod fuzzer;
pub mod summation;

pub use fuzzer::{FuzzReport, OracleFuzzer};
pub use summation::{NaiveSum, ExactIntegerSum, Summation};

use crate::core::bridge::{exact_from_finite_parts, from_exact_integer, ExactInteger};
use crate::core::parts::decompose;

/// Correctly rounded sum of `values`
///
/// - any NaN, or infinities of both signs: NaN
/// - infinities of one sign: that infinity
/// - only -0.0, or no values at all: -0.0
/// - otherwise: exact integer sum, rounded once
pub fn reference_sum(values: &[f64]) -> f64 {
    let mut positive_infinity = false;
    let mut negative_infinity = false;

    for &value in values {
        if value.is_nan() {
            return f64::NAN;
        }
        if value == f64::INFINITY {
            positive_infinity = true;
        } else if value == f64::NEG_INFINITY {
            negative_infinity = true;
        }
    }

    match (positive_infinity, negative_infinity) {
        (true, true) => return f64::NAN,
        (true, false) => return f64::INFINITY,
        (false, true) => return f64::NEG_INFINITY,
        (false, false) => {}
    }

    if values.iter().all(|&v| is_negative_zero(v)) {
        return -0.0;
    }

    let mut total = ExactInteger::zero();
    for &value in values {
        total += exact_from_finite_parts(decompose(value));
    }
    from_exact_integer(&total)
}

/// Outcome of one oracle comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Bit-identical to the oracle
    Match,
    /// Not bit-identical to the oracle
    Mismatch {
        /// Oracle result
        expected: f64,
        /// Algorithm result
        actual: f64,
    },
    /// Input made only of -0.0; integer zero has no sign so the oracle abstains
    Excluded,
}

impl Verdict {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Verdict::Mismatch { .. })
    }
}

/// Run `algorithm` and the oracle on the same input and compare the results
pub fn compare_with_oracle<S: Summation + ?Sized>(algorithm: &S, values: &[f64]) -> Verdict {
    if !values.is_empty() && values.iter().all(|&v| is_negative_zero(v)) {
        return Verdict::Excluded;
    }

    let actual = algorithm.sum(values);
    let expected = reference_sum(values);

    if same_double(expected, actual) {
        Verdict::Match
    } else {
        Verdict::Mismatch { expected, actual }
    }
}

/// `true` unless `algorithm` disagrees with the oracle on `values`
pub fn check_against_oracle<S: Summation + ?Sized>(algorithm: &S, values: &[f64]) -> bool {
    !compare_with_oracle(algorithm, values).is_mismatch()
}

/// IEEE bit identity, except that every NaN equals every other NaN
pub fn same_double(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

#[inline(always)]
fn is_negative_zero(value: f64) -> bool {
    value == 0.0 && value.is_sign_negative()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rounding() {
        // Exact 0.1 + 0.1 + 0.1 rounds once, the same way the CPU rounds the last add
        assert_eq!(reference_sum(&[0.1, 0.1, 0.1]), 0.30000000000000004);
        assert_eq!(reference_sum(&[1e30, 0.1, -1e30]), 0.1);
    }

    #[test]
    fn test_special_values() {
        assert_eq!(reference_sum(&[f64::INFINITY]), f64::INFINITY);
        assert_eq!(reference_sum(&[f64::NEG_INFINITY]), f64::NEG_INFINITY);
        assert!(reference_sum(&[f64::NEG_INFINITY, f64::INFINITY]).is_nan());
        assert!(reference_sum(&[1.0, f64::NAN, f64::INFINITY]).is_nan());
    }

    #[test]
    fn test_zero_signs() {
        assert!(reference_sum(&[]).is_sign_negative());
        assert!(reference_sum(&[-0.0, -0.0]).is_sign_negative());
        assert_eq!(reference_sum(&[-0.0, 0.0]).to_bits(), 0.0f64.to_bits());
        assert_eq!(reference_sum(&[1.0, -1.0]).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_same_double() {
        assert!(same_double(f64::NAN, -f64::NAN));
        assert!(!same_double(0.0, -0.0));
        assert!(same_double(1.0, 1.0));
        assert!(!same_double(1.0, f64::NAN));
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(compare_with_oracle(&NaiveSum, &[1.0, 2.0]), Verdict::Match);
        assert_eq!(compare_with_oracle(&NaiveSum, &[-0.0, -0.0]), Verdict::Excluded);
        assert_eq!(
            compare_with_oracle(&NaiveSum, &[1e30, 0.1, -1e30]),
            Verdict::Mismatch {
                expected: 0.1,
                actual: 0.0
            }
        );
        assert!(!check_against_oracle(&NaiveSum, &[1e30, 0.1, -1e30]));
        assert!(check_against_oracle(&ExactIntegerSum, &[1e30, 0.1, -1e30]));
    }

    #[test]
    fn test_empty_input_is_compared() {
        // The empty sum is -0.0 on both sides, so it is checked rather than excluded
        assert_eq!(compare_with_oracle(&NaiveSum, &[]), Verdict::Match);
        let positive_zero = |_: &[f64]| 0.0;
        assert!(compare_with_oracle(&positive_zero, &[]).is_mismatch());
    }
}
