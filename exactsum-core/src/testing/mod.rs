//! Testing utilities shared by unit tests, integration tests and fuzz targets
//!
//! Provides:
//! - Named IEEE-754 boundary values
//! - Bit-identity assertions that treat all NaNs as equal
//! - Edge-case sequences that broke earlier precise-summation implementations

pub mod helpers;

pub use helpers::*;
