//! Exact binary64 building blocks
//!
//! This module provides the two layers everything else is built on:
//! - `parts`: bit codec between a double and its raw IEEE-754 fields
//! - `bridge`: exact double ⇄ big integer conversion with ties-to-even rounding
//!
//! Both are pure functions over `u64` bit patterns and integers; there is no
//! shared state, so they are safe to call from any thread.

pub mod bridge;
pub mod errors;
pub mod parts;

#[cfg(test)]
mod bridge_proptest;

// Re-export commonly used types
pub use bridge::{from_exact_integer, to_exact_integer, ExactInteger};
pub use errors::{Divergence, FuzzError, InvalidInputError};
pub use parts::{compose, decompose, FloatParts};
