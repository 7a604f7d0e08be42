//! Behaviour tests for near-surface wind extrapolation.

use rstest::rstest;
use surfside_core::{PowerLawProfile, wind_at_2m};

const TOLERANCE: f32 = 1e-4;

#[rstest]
#[case(0.0, 0.0)]
#[case(10.0, 8.377)]
#[case(30.0, 25.131)]
#[case(8.0, 6.702)]
fn attenuates_reference_wind(#[case] speed_10m: f32, #[case] expected: f32) {
    let near = wind_at_2m(speed_10m);
    assert!((near - expected).abs() < 1e-2, "expected {expected}, got {near}");
}

#[rstest]
#[case(0.5)]
#[case(12.0)]
#[case(45.0)]
#[case(150.0)]
fn never_exceeds_reference(#[case] speed_10m: f32) {
    assert!(wind_at_2m(speed_10m) <= speed_10m);
}

#[rstest]
fn steeper_exponent_attenuates_more() {
    let gentle = PowerLawProfile::new(10.0, 2.0, 0.10).expect("valid profile");
    let steep = PowerLawProfile::new(10.0, 2.0, 0.14).expect("valid profile");
    assert!(steep.extrapolate(20.0) < gentle.extrapolate(20.0));
}

#[rstest]
fn equal_heights_leave_speed_unchanged() {
    let flat = PowerLawProfile::new(10.0, 10.0, 0.11).expect("valid profile");
    assert!((flat.extrapolate(17.0) - 17.0).abs() < TOLERANCE);
}
