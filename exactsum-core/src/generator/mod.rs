//! Adversarial float generator
//!
//! Uniformly random bit patterns almost never land on the places where
//! rounding code breaks: binade edges, the subnormal threshold, the top of
//! the exponent range, all-ones significands one carry away from a new
//! binade. Half of all exponent and significand draws therefore come from
//! curated boundary sets; the other half are uniform over the legal range.
//!
//! Exponents never exceed [`MAX_FINITE_EXPONENT`], so every generated value
//! is finite.

pub mod source;

pub use source::RandomSource;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::parts::{compose, FloatParts, MAX_FINITE_EXPONENT, SIGNIFICAND_MASK};

/// Biased exponents near overflow, near the subnormal threshold, near one
/// and near `2^53` (where integers stop being exact)
pub const BOUNDARY_EXPONENTS: [u16; 14] = [
    2046, 2045, 1994, 1995, 1993, 0, 1, 2, 1021, 1022, 1023, 1024, 1025, 1026,
];

/// Significands one bit away from a carry, a borrow, or the halfway point
pub const BOUNDARY_SIGNIFICANDS: [u64; 8] = [
    SIGNIFICAND_MASK,
    1 << 51,
    (1 << 51) | 1,
    SIGNIFICAND_MASK - 1,
    (1 << 51) - 1,
    0,
    1,
    2,
];

/// Draw one boundary-biased finite double
///
/// Consumes exactly seven words from `source` regardless of outcome.
pub fn random_float<R: RandomSource + ?Sized>(source: &mut R) -> f64 {
    compose(random_parts(source))
}

/// Draw the raw fields of one boundary-biased finite double
pub fn random_parts<R: RandomSource + ?Sized>(source: &mut R) -> FloatParts {
    let sign = source.next_int(0, 1) as u8;

    let use_boundary_exponent = source.next_bool();
    let boundary_exponent = source.pick_from(&BOUNDARY_EXPONENTS);
    let uniform_exponent = source.next_int(0, u64::from(MAX_FINITE_EXPONENT)) as u16;
    let exponent = if use_boundary_exponent {
        boundary_exponent
    } else {
        uniform_exponent
    };

    let use_boundary_significand = source.next_bool();
    let boundary_significand = source.pick_from(&BOUNDARY_SIGNIFICANDS);
    let uniform_significand = source.next_float(0.0, (SIGNIFICAND_MASK + 1) as f64) as u64;
    let significand = if use_boundary_significand {
        boundary_significand
    } else {
        uniform_significand
    };

    FloatParts::from_fields(sign, exponent, significand)
}

/// Seeded generator state for one fuzz run
///
/// Not meant to be shared: every draw mutates the underlying source.
#[derive(Debug, Clone)]
pub struct FloatGenerator<R = StdRng> {
    source: R,
    seed: Option<u64>,
}

impl FloatGenerator<StdRng> {
    /// Generator that replays the same floats for the same seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl<R: RandomSource> FloatGenerator<R> {
    /// Wrap an existing source; the seed is unknown
    pub fn new(source: R) -> Self {
        Self { source, seed: None }
    }

    /// Seed this generator was created from, if known
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn random_float(&mut self) -> f64 {
        random_float(&mut self.source)
    }

    pub fn random_parts(&mut self) -> FloatParts {
        random_parts(&mut self.source)
    }

    /// A sequence whose length is uniform in `min_len..=max_len`
    pub fn random_sequence(&mut self, min_len: usize, max_len: usize) -> Vec<f64> {
        let len = self.source.next_int(min_len as u64, max_len as u64) as usize;
        (0..len).map(|_| self.random_float()).collect()
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }
}
