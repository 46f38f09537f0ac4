//! Fuzz target for the IEEE-754 bit codec
//!
//! Any 64-bit pattern must survive decompose/compose unchanged, NaN
//! payloads included, and its fields must fit their bit widths.

#![no_main]

use exactsum_core::core::parts::{EXPONENT_MASK, SIGNIFICAND_MASK};
use exactsum_core::{compose, decompose, FloatParts};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let bits = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let value = f64::from_bits(bits);

    let parts = decompose(value);
    assert!(parts.sign() <= 1, "sign {} out of range", parts.sign());
    assert!(
        u64::from(parts.exponent()) <= EXPONENT_MASK,
        "exponent {} out of range",
        parts.exponent()
    );
    assert!(
        parts.significand() <= SIGNIFICAND_MASK,
        "significand {:#x} out of range",
        parts.significand()
    );

    assert_eq!(
        compose(parts).to_bits(),
        bits,
        "codec round-trip changed {:#018x}",
        bits
    );

    // The checked constructor accepts exactly what decompose produces
    let rebuilt = FloatParts::new(parts.sign(), parts.exponent(), parts.significand())
        .expect("decomposed fields are always in range");
    assert_eq!(rebuilt, parts);
});
