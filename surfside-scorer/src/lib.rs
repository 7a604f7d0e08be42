//! Surf scoring for Surfside spots.
//!
//! The engine rates an [`Observation`] at a spot for one
//! [`AbilityTier`] on a `0.0..=10.0` scale. Three sub-scores feed the
//! result:
//! - **Swell quality** measures swell height against the tier's ideal band
//!   and penalises short periods.
//! - **Wind quality** classifies near-surface wind as offshore, cross-shore,
//!   or onshore, scales the effect by strength, and penalises wind above the
//!   tier's ceiling.
//! - **Wave-height consistency** checks the combined wave height against the
//!   same ideal band.
//!
//! Sub-scores are blended with [`ScoreWeights`] and explained by an ordered
//! table of reason rules, so identical input always yields identical output.
//!
//! # Examples
//!
//! ```
//! use surfside_core::{AbilityTier, Observation, ObservationReadings};
//! use surfside_scorer::score_spot;
//!
//! let observation = Observation::new(ObservationReadings {
//!     swell_height: 1.5,
//!     swell_period: 12.0,
//!     wave_height: 1.5,
//!     wind_speed_10m: 8.0,
//!     wind_direction: 225.0,
//!     ..ObservationReadings::default()
//! });
//! let result = score_spot(&observation, 45.0, AbilityTier::Intermediate);
//! assert!(result.score >= 7.0);
//! assert!(!result.reasons.is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use surfside_core::{AbilityTier, Observation, ScoreResult, Scorer, SpotProfile};

mod assessment;
pub mod banding;
mod engine;
mod reasons;
mod weights;
pub mod wind;

pub use assessment::Assessment;
pub use banding::BandPosition;
pub use engine::SurfScorer;
pub use reasons::{STRONG_ONSHORE_KMH, explain};
pub use weights::{ScoreWeights, ScoreWeightsError};
pub use wind::{LIGHT_WIND_KMH, NEUTRAL_WIND_SCORE, STRONG_WIND_KMH, WindClass};

/// Score `observation` at a spot facing `spot_orientation` degrees.
///
/// Uses the default [`ScoreWeights`]. The orientation is wrapped into
/// `0.0..360.0` and readings are normalised, so every input yields a score.
#[must_use]
pub fn score_spot(
    observation: &Observation,
    spot_orientation: f32,
    ability: AbilityTier,
) -> ScoreResult {
    SurfScorer::default().score(observation, &SpotProfile::new(spot_orientation), ability)
}
