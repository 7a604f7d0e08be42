//! Unit coverage for batch assessment.
#![forbid(unsafe_code)]

use rstest::{fixture, rstest};
use surfside_core::test_support::{FixedScorer, clean_readings};
use surfside_core::{AbilityTier, Observation};
use surfside_scorer::SurfScorer;

use crate::{
    FallbackSource, ObservationError, Rating, StaticObservationSource, all_spots, assess_spots,
    fallback_readings, spot_by_id,
};

#[fixture]
fn source() -> StaticObservationSource {
    StaticObservationSource::default()
        .with("strandhill", clean_readings())
        .with("easkey", clean_readings())
}

#[rstest]
fn records_follow_spot_order(source: StaticObservationSource) {
    let spots = ["easkey", "strandhill"].map(|id| spot_by_id(id).expect("catalogued spot"));
    let records = assess_spots(
        &source,
        spots,
        AbilityTier::Intermediate,
        &FixedScorer::new(6.5).with_reason("steady"),
    )
    .expect("both spots have readings");

    let ids: Vec<&str> = records.iter().map(|record| record.spot_id.as_str()).collect();
    assert_eq!(ids, ["easkey", "strandhill"]);
    assert!(records.iter().all(|record| record.rating == Rating::Good));
    assert!(records.iter().all(|record| record.reasons == ["steady"]));
}

#[rstest]
fn missing_readings_fail_without_fallback(source: StaticObservationSource) {
    let err = assess_spots(
        &source,
        all_spots(),
        AbilityTier::Beginner,
        &SurfScorer::default(),
    )
    .expect_err("most spots lack readings");
    assert!(matches!(err, ObservationError::UnknownSpot { .. }));
}

#[rstest]
fn fallback_scores_the_whole_catalogue(source: StaticObservationSource) {
    let records = assess_spots(
        &FallbackSource::new(source),
        all_spots(),
        AbilityTier::Advanced,
        &SurfScorer::default(),
    )
    .expect("fallback never fails");

    assert_eq!(records.len(), all_spots().len());
    let fallback = Observation::new(fallback_readings());
    let lettergesh = records
        .iter()
        .find(|record| record.spot_id == "lettergesh")
        .expect("lettergesh record");
    assert_eq!(lettergesh.swell_height, fallback.swell_height());
    assert_eq!(lettergesh.wind_speed_2m, fallback.wind_speed_2m());
    assert!((0.0..=10.0).contains(&lettergesh.score));
}
