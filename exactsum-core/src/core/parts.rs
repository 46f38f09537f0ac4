//! Bit codec for IEEE-754 binary64
//!
//! Splits a double into its raw `{sign, exponent, significand}` fields and
//! assembles it back. Nothing here interprets the fields: NaN payloads,
//! infinities, signed zeros and subnormals all pass through as plain bits.
//!
//! ```text
//!  63  62        52 51                                                0
//! +---+------------+---------------------------------------------------+
//! | s |  exponent  |                    significand                    |
//! +---+------------+---------------------------------------------------+
//! ```

use super::errors::InvalidInputError;

/// Position of the sign bit
pub const SIGN_SHIFT: u32 = 63;

/// Width of the biased exponent field
pub const EXPONENT_BITS: u32 = 11;

/// Width of the stored significand (implicit leading bit excluded)
pub const SIGNIFICAND_BITS: u32 = 52;

/// Mask for the exponent field after shifting it down
pub const EXPONENT_MASK: u64 = (1 << EXPONENT_BITS) - 1;

/// Mask for the significand field
pub const SIGNIFICAND_MASK: u64 = (1 << SIGNIFICAND_BITS) - 1;

/// The implicit leading bit of a normal significand
pub const IMPLICIT_BIT: u64 = 1 << SIGNIFICAND_BITS;

/// Exponent bias
pub const EXPONENT_BIAS: u16 = 1023;

/// Largest biased exponent of a finite value
pub const MAX_FINITE_EXPONENT: u16 = 2046;

/// Biased exponent of infinities and NaNs
pub const SPECIAL_EXPONENT: u16 = 2047;

/// Raw field decomposition of one 64-bit pattern
///
/// Fields are private so every value in circulation came either from the
/// codec or from the checked constructor, and always fits its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatParts {
    sign: u8,
    exponent: u16,
    significand: u64,
}

impl FloatParts {
    /// Build from raw fields, rejecting anything wider than its field
    pub fn new(sign: u8, exponent: u16, significand: u64) -> Result<Self, InvalidInputError> {
        if sign > 1 {
            return Err(InvalidInputError::FieldOutOfRange {
                field: "sign",
                value: u64::from(sign),
            });
        }
        if u64::from(exponent) > EXPONENT_MASK {
            return Err(InvalidInputError::FieldOutOfRange {
                field: "exponent",
                value: u64::from(exponent),
            });
        }
        if significand > SIGNIFICAND_MASK {
            return Err(InvalidInputError::FieldOutOfRange {
                field: "significand",
                value: significand,
            });
        }
        Ok(Self::from_fields(sign, exponent, significand))
    }

    /// Caller guarantees every field is in range
    #[inline(always)]
    pub(crate) const fn from_fields(sign: u8, exponent: u16, significand: u64) -> Self {
        debug_assert!(sign <= 1);
        debug_assert!(exponent as u64 <= EXPONENT_MASK);
        debug_assert!(significand <= SIGNIFICAND_MASK);
        Self {
            sign,
            exponent,
            significand,
        }
    }

    /// Split a raw 64-bit pattern into fields
    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            sign: (bits >> SIGN_SHIFT) as u8,
            exponent: ((bits >> SIGNIFICAND_BITS) & EXPONENT_MASK) as u16,
            significand: bits & SIGNIFICAND_MASK,
        }
    }

    /// Assemble the raw 64-bit pattern
    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        ((self.sign as u64) << SIGN_SHIFT)
            | ((self.exponent as u64) << SIGNIFICAND_BITS)
            | self.significand
    }

    /// Sign bit: 0 for positive, 1 for negative
    #[inline(always)]
    pub const fn sign(&self) -> u8 {
        self.sign
    }

    /// Biased exponent, 0..=2047
    #[inline(always)]
    pub const fn exponent(&self) -> u16 {
        self.exponent
    }

    /// Stored significand, 0..2^52
    #[inline(always)]
    pub const fn significand(&self) -> u64 {
        self.significand
    }

    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        self.sign == 1
    }

    /// Zero or subnormal: no implicit leading bit
    #[inline(always)]
    pub const fn is_subnormal_or_zero(&self) -> bool {
        self.exponent == 0
    }

    /// Infinity or NaN
    #[inline(always)]
    pub const fn is_special(&self) -> bool {
        self.exponent == SPECIAL_EXPONENT
    }
}

/// Reinterpret a double as its raw fields
#[inline(always)]
pub fn decompose(value: f64) -> FloatParts {
    FloatParts::from_bits(value.to_bits())
}

/// Reinterpret raw fields as a double
#[inline(always)]
pub fn compose(parts: FloatParts) -> f64 {
    f64::from_bits(parts.to_bits())
}

impl From<f64> for FloatParts {
    fn from(value: f64) -> Self {
        decompose(value)
    }
}

impl From<FloatParts> for f64 {
    fn from(parts: FloatParts) -> Self {
        compose(parts)
    }
}
