//! Exact conversion between doubles and arbitrary-precision integers
//!
//! Every finite double is a dyadic rational whose denominator divides
//! 2^1074, so scaling by 2^1074 turns it into an integer with no loss:
//! the smallest subnormal becomes 1 and `f64::MAX` becomes
//! `(2^53 - 1) * 2^2045`. Sums of these integers are exact, and
//! [`from_exact_integer`] rounds the result back to binary64 exactly once,
//! reproducing hardware round-to-nearest-even bit for bit.
//!
//! Under this scaling a biased exponent `e > 0` contributes a factor of
//! `2^(e - 1)`, and the bit length of a normal magnitude is always
//! `e + 52`. That is what lets the conversion back read the exponent field
//! straight off the bit length.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

use super::errors::InvalidInputError;
use super::parts::{
    compose, decompose, FloatParts, IMPLICIT_BIT, MAX_FINITE_EXPONENT, SIGNIFICAND_BITS,
    SIGNIFICAND_MASK,
};

/// Significant bits in a normal double, implicit bit included
const PRECISION: u64 = SIGNIFICAND_BITS as u64 + 1;

/// Exact value of a finite double, in units of the smallest subnormal
///
/// There is no negative zero: `-0.0` and `0.0` are both the integer 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactInteger(BigInt);

impl ExactInteger {
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Exact value of a finite double; NaN and infinities have none
    pub fn from_f64(value: f64) -> Result<Self, InvalidInputError> {
        to_exact_integer(value)
    }

    /// Nearest double, ties to even, saturating to infinity
    pub fn to_f64(&self) -> f64 {
        from_exact_integer(self)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// Number of bits in the magnitude (0 for zero)
    pub fn bit_length(&self) -> u64 {
        self.0.bits()
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub fn into_bigint(self) -> BigInt {
        self.0
    }
}

impl From<BigInt> for ExactInteger {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i64> for ExactInteger {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl TryFrom<f64> for ExactInteger {
    type Error = InvalidInputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        to_exact_integer(value)
    }
}

impl From<&ExactInteger> for f64 {
    fn from(value: &ExactInteger) -> Self {
        from_exact_integer(value)
    }
}

impl Add for ExactInteger {
    type Output = ExactInteger;

    fn add(self, rhs: ExactInteger) -> ExactInteger {
        ExactInteger(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a ExactInteger> for ExactInteger {
    type Output = ExactInteger;

    fn add(self, rhs: &'a ExactInteger) -> ExactInteger {
        ExactInteger(self.0 + &rhs.0)
    }
}

impl AddAssign for ExactInteger {
    fn add_assign(&mut self, rhs: ExactInteger) {
        self.0 += rhs.0;
    }
}

impl<'a> AddAssign<&'a ExactInteger> for ExactInteger {
    fn add_assign(&mut self, rhs: &'a ExactInteger) {
        self.0 += &rhs.0;
    }
}

impl Neg for ExactInteger {
    type Output = ExactInteger;

    fn neg(self) -> ExactInteger {
        ExactInteger(-self.0)
    }
}

impl Sum for ExactInteger {
    fn sum<I: Iterator<Item = ExactInteger>>(iter: I) -> Self {
        iter.fold(ExactInteger::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a ExactInteger> for ExactInteger {
    fn sum<I: Iterator<Item = &'a ExactInteger>>(iter: I) -> Self {
        iter.fold(ExactInteger::zero(), |acc, x| acc + x)
    }
}

impl fmt::Display for ExactInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Exact integer value of a finite double
///
/// Fails on NaN and on either infinity; never substitutes a default.
pub fn to_exact_integer(value: f64) -> Result<ExactInteger, InvalidInputError> {
    if value.is_nan() {
        return Err(InvalidInputError::NotANumber);
    }
    if value.is_infinite() {
        return Err(InvalidInputError::Infinite {
            positive: value > 0.0,
        });
    }
    Ok(exact_from_finite_parts(decompose(value)))
}

/// Caller guarantees the parts are not infinity or NaN
pub(crate) fn exact_from_finite_parts(parts: FloatParts) -> ExactInteger {
    debug_assert!(!parts.is_special());

    let magnitude = if parts.is_subnormal_or_zero() {
        BigInt::from(parts.significand())
    } else {
        BigInt::from(IMPLICIT_BIT | parts.significand()) << (parts.exponent() - 1)
    };

    if parts.is_negative() {
        ExactInteger(-magnitude)
    } else {
        ExactInteger(magnitude)
    }
}

/// Nearest double to an exact integer, ties to even
///
/// Never fails: magnitudes whose correctly rounded value exceeds
/// `f64::MAX` saturate to a signed infinity.
pub fn from_exact_integer(value: &ExactInteger) -> f64 {
    let sign = u8::from(value.is_negative());
    let magnitude = value.0.magnitude();
    let bit_length = magnitude.bits();

    // Fewer than 53 bits is a subnormal or zero, and always exact
    if bit_length <= u64::from(SIGNIFICAND_BITS) {
        let significand = magnitude.to_u64().unwrap_or_default();
        return compose(FloatParts::from_fields(sign, 0, significand));
    }

    let dropped = bit_length - PRECISION;
    let retained = low_u64(&(magnitude >> dropped));
    let mut significand = retained & SIGNIFICAND_MASK;
    let mut exponent = bit_length - u64::from(SIGNIFICAND_BITS);

    if round_up(magnitude, dropped, retained) {
        significand += 1;
        if significand == IMPLICIT_BIT {
            significand = 0;
            exponent += 1;
        }
    }

    if exponent > u64::from(MAX_FINITE_EXPONENT) {
        return if sign == 1 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    compose(FloatParts::from_fields(sign, exponent as u16, significand))
}

/// Round-to-nearest-even decision for dropping the low `dropped` bits
///
/// Rounds up when the round bit is set and either the value is strictly
/// above the halfway point (sticky) or exactly halfway with an odd
/// retained significand.
fn round_up(magnitude: &BigUint, dropped: u64, retained: u64) -> bool {
    if dropped == 0 {
        return false;
    }
    let round_bit = magnitude.bit(dropped - 1);
    if !round_bit {
        return false;
    }
    let odd = retained & 1 == 1;
    // magnitude is non-zero here, so trailing_zeros is always Some
    let sticky = magnitude
        .trailing_zeros()
        .is_some_and(|zeros| zeros < dropped - 1);
    odd || sticky
}

/// Low 64 bits of a magnitude known to fit in 53
fn low_u64(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or_default()
}
