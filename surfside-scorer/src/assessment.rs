//! Per-call breakdown of how an observation measures up.
//!
//! An [`Assessment`] holds every intermediate value the engine derives, so
//! the weighted score and the reason rules read from one source.

use surfside_core::{AbilityProfile, AbilityTier, MAX_SCORE, Observation, SpotProfile};

use crate::banding::{self, BandPosition};
use crate::wind::{WindClass, wind_quality};

/// Intermediate results for one observation, spot, and ability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// Ability the assessment was tuned for.
    pub ability: AbilityTier,
    /// Static configuration of `ability`.
    pub profile: &'static AbilityProfile,
    /// Swell height in metres.
    pub swell_height: f32,
    /// Swell height relative to the ideal band.
    pub swell_height_position: BandPosition,
    /// Swell height fit in `0.0..=1.0`.
    pub swell_height_fit: f32,
    /// Swell period in seconds.
    pub swell_period: f32,
    /// Swell period relative to the ideal band.
    pub swell_period_position: BandPosition,
    /// Swell period quality in `0.0..=1.0`; never penalises long periods.
    pub swell_period_quality: f32,
    /// Near-surface wind speed in km/h.
    pub wind_speed: f32,
    /// Wind direction relative to the coastline.
    pub wind_class: WindClass,
    /// Combined wave height in metres.
    pub wave_height: f32,
    /// Wave height fit against the swell height band, in `0.0..=1.0`.
    pub wave_height_fit: f32,
    /// Swell quality sub-score in `0.0..=10.0`.
    pub swell_score: f32,
    /// Wind quality sub-score in `0.0..=10.0`.
    pub wind_score: f32,
    /// Wave-height consistency sub-score in `0.0..=10.0`.
    pub wave_height_score: f32,
}

impl Assessment {
    /// Evaluate `observation` at `spot` for `ability`.
    #[expect(
        clippy::float_arithmetic,
        reason = "sub-scores scale unit fits onto the 0-10 range"
    )]
    #[must_use]
    pub fn new(observation: &Observation, spot: &SpotProfile, ability: AbilityTier) -> Self {
        let profile = ability.profile();

        let swell_height = observation.swell_height();
        let swell_height_fit = banding::fit(swell_height, &profile.swell_height);
        let swell_period = observation.swell_period();
        let swell_period_quality = banding::lower_fit(swell_period, &profile.swell_period);

        let wind_speed = observation.wind_speed_2m();
        let wind_class = WindClass::classify(observation.wind_direction(), spot);

        let wave_height = observation.wave_height();
        let wave_height_fit = banding::fit(wave_height, &profile.swell_height);

        Self {
            ability,
            profile,
            swell_height,
            swell_height_position: BandPosition::of(swell_height, &profile.swell_height),
            swell_height_fit,
            swell_period,
            swell_period_position: BandPosition::of(swell_period, &profile.swell_period),
            swell_period_quality,
            wind_speed,
            wind_class,
            wave_height,
            wave_height_fit,
            swell_score: MAX_SCORE * swell_height_fit * swell_period_quality,
            wind_score: wind_quality(wind_class, wind_speed, profile.wind_ceiling_kmh),
            wave_height_score: MAX_SCORE * wave_height_fit,
        }
    }
}
