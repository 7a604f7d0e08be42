//! Facade crate for the Surfside surf scoring engine.
//!
//! This crate re-exports the core domain types and exposes the scoring
//! engine and data adapters behind feature flags.

#![forbid(unsafe_code)]

pub use surfside_core::{
    AbilityProfile, AbilityTier, Band, MAX_SCORE, Observation, ObservationReadings,
    PowerLawProfile, ScoreResult, Scorer, Spot, SpotBuilder, SpotError, SpotKind, SpotProfile,
    WindProfileError, wind_at_2m,
};

#[cfg(feature = "scorer")]
pub use surfside_scorer::{ScoreWeights, ScoreWeightsError, SurfScorer, WindClass, score_spot};

#[cfg(feature = "data")]
pub use surfside_data::{
    ConditionsRecord, FallbackSource, ObservationError, ObservationSource, OpenMeteoPayload,
    Rating, StaticObservationSource, all_spots, assess_spot, assess_spots, spot_by_id,
};
