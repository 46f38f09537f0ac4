//! Fuzz target for the reference sum against hardware addition
//!
//! IEEE-754 addition of two doubles is correctly rounded, so the oracle must
//! agree with `a + b` on every pair, signed zeros and NaN included.

#![no_main]

use exactsum_core::oracle::same_double;
use exactsum_core::reference_sum;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let a = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let b = f64::from_le_bytes([
        data[8], data[9], data[10], data[11], data[12], data[13], data[14], data[15],
    ]);

    let expected = a + b;
    let actual = reference_sum(&[a, b]);
    assert!(
        same_double(expected, actual),
        "{:?} + {:?}: hardware {:?}, oracle {:?}",
        a,
        b,
        expected,
        actual
    );

    // Sum is symmetric down to the bit
    assert!(same_double(actual, reference_sum(&[b, a])));
});
