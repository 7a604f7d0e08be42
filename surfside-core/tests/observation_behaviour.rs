#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for observation construction.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use surfside_core::{Observation, ObservationReadings};

/// World state shared across observation scenarios.
#[derive(Debug, Default)]
struct ObservationWorld {
    readings: RefCell<ObservationReadings>,
    observation: RefCell<Option<Observation>>,
}

#[fixture]
fn world() -> ObservationWorld {
    ObservationWorld::default()
}

#[given("readings with a 10 m wind of 20 km/h")]
fn given_reference_wind(world: &ObservationWorld) {
    world.readings.borrow_mut().wind_speed_10m = 20.0;
}

#[given("readings with negative heights and unwrapped bearings")]
fn given_out_of_range(world: &ObservationWorld) {
    world.readings.replace(ObservationReadings {
        swell_height: -1.0,
        swell_period: -4.0,
        swell_direction: -30.0,
        wave_height: -0.2,
        wave_period: f32::NAN,
        wind_speed_10m: -8.0,
        wind_direction: 1_000.0,
    });
}

#[when("I build an observation")]
fn when_build(world: &ObservationWorld) {
    let readings = *world.readings.borrow();
    world.observation.replace(Some(Observation::new(readings)));
}

#[then("the near-surface wind is weaker than the reference wind")]
fn then_weaker(world: &ObservationWorld) {
    let observation = world.observation.borrow().expect("observation should be built");
    assert!(observation.wind_speed_2m() > 0.0);
    assert!(observation.wind_speed_2m() < observation.wind_speed_10m());
}

#[then("every magnitude is non-negative")]
fn then_non_negative(world: &ObservationWorld) {
    let observation = world.observation.borrow().expect("observation should be built");
    for value in [
        observation.swell_height(),
        observation.swell_period(),
        observation.wave_height(),
        observation.wave_period(),
        observation.wind_speed_10m(),
        observation.wind_speed_2m(),
    ] {
        assert!(value >= 0.0, "magnitude {value} should be non-negative");
    }
}

#[then("every bearing lies within a single turn")]
fn then_wrapped(world: &ObservationWorld) {
    let observation = world.observation.borrow().expect("observation should be built");
    for bearing in [observation.swell_direction(), observation.wind_direction()] {
        assert!((0.0..360.0).contains(&bearing), "bearing {bearing} not wrapped");
    }
}

#[scenario(path = "tests/features/observation.feature", index = 0)]
fn derived_near_surface_wind(world: ObservationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/observation.feature", index = 1)]
fn normalised_readings(world: ObservationWorld) {
    let _ = world;
}
