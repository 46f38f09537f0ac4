//! Fuzz target for the exact integer bridge
//!
//! Finite doubles must round-trip exactly (-0.0 comes back as +0.0);
//! NaN and infinities must be rejected.

#![no_main]

use exactsum_core::{from_exact_integer, to_exact_integer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    match to_exact_integer(value) {
        Ok(exact) => {
            assert!(value.is_finite(), "{:?} has no exact value", value);
            assert!(exact.bit_length() <= 2098, "{:?} is too wide", value);
            assert_eq!(exact.is_negative(), value < 0.0);

            let back = from_exact_integer(&exact);
            if value == 0.0 {
                assert_eq!(back.to_bits(), 0, "zero must come back as +0.0");
            } else {
                assert_eq!(
                    back.to_bits(),
                    value.to_bits(),
                    "round-trip changed {:?} into {:?}",
                    value,
                    back
                );
            }
        }
        Err(_) => {
            assert!(!value.is_finite(), "finite {:?} was rejected", value);
        }
    }
});
