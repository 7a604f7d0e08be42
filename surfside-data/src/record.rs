//! Scored conditions as handed to persistence and presentation.

use std::fmt;

use serde::{Deserialize, Serialize};
use surfside_core::{Observation, ScoreResult, Spot};

/// Coarse label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Below 4.
    Poor,
    /// From 4 up to 6.
    Fair,
    /// From 6 up to 8.
    Good,
    /// 8 and above.
    Excellent,
}

impl Rating {
    /// Label a score in `0.0..=10.0`.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Return the rating as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observation and score for one spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsRecord {
    /// Catalogue identifier of the spot.
    pub spot_id: String,
    /// Display name of the spot.
    pub spot_name: String,
    /// Swell height in metres.
    pub swell_height: f32,
    /// Swell period in seconds.
    pub swell_period: f32,
    /// Direction the swell arrives from, in degrees.
    pub swell_direction: f32,
    /// Combined wave height in metres.
    pub wave_height: f32,
    /// Combined wave period in seconds.
    pub wave_period: f32,
    /// Wind speed at 10 m, in km/h.
    pub wind_speed_10m: f32,
    /// Wind speed at 2 m, in km/h.
    pub wind_speed_2m: f32,
    /// Direction the wind blows from, in degrees.
    pub wind_direction: f32,
    /// Score in `0.0..=10.0`.
    pub score: f32,
    /// Label derived from `score`.
    pub rating: Rating,
    /// Reasons in evaluation order.
    pub reasons: Vec<String>,
}

impl ConditionsRecord {
    /// Combine a spot, its observation, and the resulting score.
    #[must_use]
    pub fn new(spot: &Spot, observation: &Observation, result: ScoreResult) -> Self {
        Self {
            spot_id: spot.id.clone(),
            spot_name: spot.name.clone(),
            swell_height: observation.swell_height(),
            swell_period: observation.swell_period(),
            swell_direction: observation.swell_direction(),
            wave_height: observation.wave_height(),
            wave_period: observation.wave_period(),
            wind_speed_10m: observation.wind_speed_10m(),
            wind_speed_2m: observation.wind_speed_2m(),
            wind_direction: observation.wind_direction(),
            score: result.score,
            rating: Rating::from_score(result.score),
            reasons: result.reasons,
        }
    }
}
