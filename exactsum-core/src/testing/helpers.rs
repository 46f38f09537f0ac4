//! Named boundary values and assertions

use crate::oracle::same_double;

/// Largest subnormal, `(2^52 - 1) * 2^-1074`
pub const LARGEST_SUBNORMAL: f64 = 2.22507385850720088902e-308;

/// Smallest normal, `2^-1022`
pub const SMALLEST_NORMAL: f64 = 2.22507385850720138309e-308;

/// Smallest positive double, `2^-1074`
pub const SMALLEST: f64 = 4.94065645841246544177e-324;

/// Half of one ulp of 11.0
pub const HALF_11_DELTA: f64 = 8.88178419700125232339e-16;

/// The double right after [`HALF_11_DELTA`]
pub const NEXT_AFTER_HALF_11_DELTA: f64 = 8.88178419700125429554e-16;

/// 11.0 plus one ulp
pub const ELEVEN_PLUS_ONE_ULP: f64 = 11.0000000000000017764;

/// 11.0 plus two ulps
pub const ELEVEN_PLUS_TWO_ULPS: f64 = 11.0000000000000035527;

/// Inputs with large intermediate overflow and cancellation
///
/// Each of these once made an incremental precise-summation algorithm
/// disagree with the exact result.
pub const EDGE_CASE_SEQUENCES: &[&[f64]] = &[
    &[1e308, 1e308, 0.1, 0.1, 1e30, 0.1, -1e30, -1e308, -1e308],
    &[1e30, 0.1, -1e30],
    &[8.98846567431158e+307, 8.988465674311579e+307, -1.7976931348623157e+308],
    &[-5.630637621603525e+255, 9.565271205476345e+307, 2.9937604643020797e+292],
    &[
        6.739986666787661e+66,
        2.0,
        -1.2689709186578243e-116,
        1.7046015739467354e+308,
        -9.979201547673601e+291,
        6.160926733208294e+307,
        -3.179557053031852e+234,
        -7.027282978772846e+307,
        -0.7500000000000001,
    ],
    &[
        0.31150493246968836,
        -8.988465674311582e+307,
        1.8315037361673755e-270,
        -15.999999999999996,
        2.9999999999999996,
        7.345200721499384e+164,
        -2.033582473639399,
        -8.98846567431158e+307,
        -3.5737295155405993e+292,
        4.13894772383715e-124,
        -3.6111186457260667e-35,
        2.387234887098013e+180,
        7.645295562778372e-298,
        3.395189016861822e-103,
        -2.6331611115768973e-149,
    ],
    &[
        -1.1442589134409902e+308,
        9.593842098384855e+138,
        4.494232837155791e+307,
        -1.3482698511467367e+308,
        4.494232837155792e+307,
    ],
    &[
        -1.1442589134409902e+308,
        4.494232837155791e+307,
        -1.3482698511467367e+308,
        4.494232837155792e+307,
    ],
    &[
        9.593842098384855e+138,
        -6.948356297254111e+307,
        -1.3482698511467367e+308,
        4.494232837155792e+307,
    ],
    &[-2.534858246857893e+115, 8.988465674311579e+307, 8.98846567431158e+307],
    &[1.3588124894186193e+308, 1.4803986201152006e+223, 6.741349255733684e+307],
    &[6.741349255733684e+307, 1.7976931348623155e+308, -7.388327292663961e+41],
    &[-1.9807040628566093e+28, 1.7976931348623157e+308, 9.9792015476736e+291],
    &[
        -1.0214557991173964e+61,
        1.7976931348623157e+308,
        8.98846567431158e+307,
        -8.988465674311579e+307,
    ],
];

/// Assert IEEE bit identity, with every NaN equal to every other NaN
#[track_caller]
pub fn assert_same_double(actual: f64, expected: f64) {
    assert!(
        same_double(actual, expected),
        "expected {:?} ({:#018x}), got {:?} ({:#018x})",
        expected,
        expected.to_bits(),
        actual,
        actual.to_bits()
    );
}

/// Next representable double towards +infinity, for finite non-negative input
pub fn next_up(value: f64) -> f64 {
    debug_assert!(value.is_finite() && value >= 0.0);
    f64::from_bits(value.to_bits() + 1)
}
