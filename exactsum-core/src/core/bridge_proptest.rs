//! Property-based tests for the bit codec and the exact integer bridge
//!
//! These tests use proptest to check IEEE-754 invariants over arbitrary
//! 64-bit patterns, catching edge cases that named-value tests miss.

#[cfg(test)]
mod tests {
    use super::super::bridge::{from_exact_integer, to_exact_integer, ExactInteger};
    use super::super::errors::InvalidInputError;
    use super::super::parts::{compose, decompose, FloatParts};
    use crate::generator::FloatGenerator;
    use crate::oracle::reference_sum;
    use proptest::prelude::*;

    fn exact(value: f64) -> ExactInteger {
        to_exact_integer(value).unwrap()
    }

    // ===== CODEC PROPERTY TESTS =====

    /// Property: decompose then compose is the identity on every bit pattern
    #[test]
    fn prop_codec_bijection() {
        proptest!(|(bits: u64)| {
            let value = f64::from_bits(bits);
            prop_assert_eq!(compose(decompose(value)).to_bits(), bits);
            prop_assert_eq!(FloatParts::from_bits(bits).to_bits(), bits);
        });
    }

    /// Property: fields always fit their widths and rebuild through the checked constructor
    #[test]
    fn prop_fields_in_range() {
        proptest!(|(bits: u64)| {
            let parts = FloatParts::from_bits(bits);
            prop_assert!(parts.sign() <= 1);
            prop_assert!(parts.exponent() < 2048);
            prop_assert!(parts.significand() < 1 << 52);
            let rebuilt = FloatParts::new(parts.sign(), parts.exponent(), parts.significand());
            prop_assert_eq!(rebuilt, Ok(parts));
        });
    }

    // ===== BRIDGE PROPERTY TESTS =====

    /// Property: every finite double round-trips bit for bit, except -0.0
    #[test]
    fn prop_roundtrip_identity() {
        proptest!(|(bits: u64)| {
            let value = f64::from_bits(bits);
            prop_assume!(value.is_finite());

            let back = from_exact_integer(&exact(value));
            if value == 0.0 {
                prop_assert_eq!(back.to_bits(), 0.0f64.to_bits());
            } else {
                prop_assert_eq!(back.to_bits(), bits,
                    "Round-trip changed {:e} into {:e}", value, back);
            }
        });
    }

    /// Property: NaN of any payload always fails conversion
    #[test]
    fn prop_nan_always_fails() {
        proptest!(|(payload in 1u64..(1 << 52), negative: bool)| {
            let bits = (u64::from(negative) << 63) | (0x7ff << 52) | payload;
            let value = f64::from_bits(bits);
            prop_assert!(value.is_nan());
            prop_assert_eq!(to_exact_integer(value), Err(InvalidInputError::NotANumber));
        });
    }

    /// Property: Infinity always fails conversion
    #[test]
    fn prop_infinity_always_fails() {
        assert_eq!(
            to_exact_integer(f64::INFINITY),
            Err(InvalidInputError::Infinite { positive: true })
        );
        assert_eq!(
            to_exact_integer(f64::NEG_INFINITY),
            Err(InvalidInputError::Infinite { positive: false })
        );
    }

    /// Property: conversion preserves sign
    #[test]
    fn prop_conversion_preserves_sign() {
        proptest!(|(bits: u64)| {
            let value = f64::from_bits(bits);
            prop_assume!(value.is_finite());
            let integer = exact(value);
            if value > 0.0 {
                prop_assert!(!integer.is_negative() && !integer.is_zero());
            } else if value < 0.0 {
                prop_assert!(integer.is_negative());
            } else {
                prop_assert!(integer.is_zero());
            }
        });
    }

    /// Property: conversion preserves ordering exactly (no ties created)
    #[test]
    fn prop_conversion_preserves_ordering() {
        proptest!(|(a: u64, b: u64)| {
            let (x, y) = (f64::from_bits(a), f64::from_bits(b));
            prop_assume!(x.is_finite() && y.is_finite());
            prop_assert_eq!(x.partial_cmp(&y), Some(exact(x).cmp(&exact(y))));
        });
    }

    /// Property: the exact sum of two doubles rounds exactly like hardware addition
    #[test]
    fn prop_pair_sum_matches_hardware() {
        proptest!(|(a: u64, b: u64)| {
            let (x, y) = (f64::from_bits(a), f64::from_bits(b));
            prop_assume!(x.is_finite() && y.is_finite());

            let bridged = from_exact_integer(&(exact(x) + exact(y)));
            let hardware = x + y;
            if hardware == 0.0 && hardware.is_sign_negative() {
                // integer zero has no sign; -0.0 + -0.0 is the only source of -0.0 here
                prop_assert_eq!(bridged.to_bits(), 0.0f64.to_bits());
            } else {
                prop_assert_eq!(bridged.to_bits(), hardware.to_bits(),
                    "{:e} + {:e}: bridge {:e}, hardware {:e}", x, y, bridged, hardware);
            }
        });
    }

    /// Property: same for boundary-biased inputs, where the interesting cases live
    #[test]
    fn prop_adversarial_pair_sum_matches_hardware() {
        proptest!(|(seed: u64)| {
            let mut generator = FloatGenerator::from_seed(seed);
            for _ in 0..64 {
                let x = generator.random_float();
                let y = generator.random_float();
                let hardware = x + y;
                let reference = reference_sum(&[x, y]);
                prop_assert_eq!(reference.to_bits(), hardware.to_bits(),
                    "{:?} + {:?}: reference {:?}, hardware {:?}", x, y, reference, hardware);
            }
        });
    }

    /// Property: exact summation does not depend on order
    #[test]
    fn prop_reference_sum_is_order_independent() {
        proptest!(|(seed: u64)| {
            let mut generator = FloatGenerator::from_seed(seed);
            let mut values = generator.random_sequence(3, 10);
            let forward = reference_sum(&values);
            values.reverse();
            let backward = reference_sum(&values);
            values.rotate_left(1);
            let rotated = reference_sum(&values);
            prop_assert_eq!(forward.to_bits(), backward.to_bits());
            prop_assert_eq!(forward.to_bits(), rotated.to_bits());
        });
    }

    /// Property: conversion is deterministic
    #[test]
    fn prop_conversion_is_deterministic() {
        proptest!(|(bits: u64)| {
            let value = f64::from_bits(bits);
            prop_assume!(value.is_finite());
            prop_assert_eq!(exact(value), exact(value));
        });
    }

    /// Property: a seed always replays the same floats
    #[test]
    fn prop_generator_is_deterministic() {
        proptest!(|(seed: u64)| {
            let mut a = FloatGenerator::from_seed(seed);
            let mut b = FloatGenerator::from_seed(seed);
            for _ in 0..32 {
                prop_assert_eq!(a.random_float().to_bits(), b.random_float().to_bits());
            }
        });
    }
}
