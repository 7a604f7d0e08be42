//! Property-based tests for the wind profile model.
//!
//! # Invariants tested
//!
//! - **Calm stays calm:** zero reference wind yields zero near-surface wind.
//! - **Monotonicity:** a stronger reference wind never yields a weaker
//!   near-surface wind.
//! - **Attenuation:** near-surface wind never exceeds the reference wind.

use proptest::prelude::*;
use surfside_core::wind_at_2m;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: extrapolation is monotonic non-decreasing.
    #[test]
    fn monotonic_in_reference_speed(a in 0.0_f32..200.0, b in 0.0_f32..200.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(wind_at_2m(low) <= wind_at_2m(high));
    }

    /// Property: near-surface wind is attenuated and non-negative.
    #[test]
    fn attenuated_and_non_negative(speed in 0.0_f32..500.0) {
        let near = wind_at_2m(speed);
        prop_assert!(near >= 0.0);
        prop_assert!(near <= speed);
    }

    /// Property: negative readings are treated as calm.
    #[test]
    fn negative_readings_are_calm(speed in -500.0_f32..0.0) {
        prop_assert_eq!(wind_at_2m(speed), 0.0);
    }
}

#[test]
fn calm_stays_calm() {
    assert_eq!(wind_at_2m(0.0), 0.0);
}
