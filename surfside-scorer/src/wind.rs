//! Wind direction classification and the wind quality sub-score.

use std::fmt;

use surfside_core::angles::angular_difference;
use surfside_core::{MAX_SCORE, SpotProfile};

/// Below this near-surface speed (km/h) wind barely touches the surface.
pub const LIGHT_WIND_KMH: f32 = 5.0;

/// Near-surface speed (km/h) at which direction has its full effect.
pub const STRONG_WIND_KMH: f32 = 30.0;

/// Wind quality when direction has no effect.
pub const NEUTRAL_WIND_SCORE: f32 = 7.0;

/// Widest angle from the offshore bearing still counted as offshore.
const OFFSHORE_LIMIT_DEG: f32 = 45.0;

/// Widest angle from the offshore bearing still counted as cross-shore.
const CROSS_SHORE_LIMIT_DEG: f32 = 90.0;

/// How the wind blows relative to the coastline at a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindClass {
    /// From land out to sea: holds wave faces up and keeps them clean.
    Offshore,
    /// Along the coast.
    CrossShore,
    /// From sea onto land: chops up wave faces.
    Onshore,
}

impl WindClass {
    /// Classify `wind_direction` against the spot's offshore bearing.
    ///
    /// # Examples
    /// ```
    /// use surfside_core::SpotProfile;
    /// use surfside_scorer::WindClass;
    ///
    /// let west_facing = SpotProfile::new(270.0);
    /// assert_eq!(WindClass::classify(100.0, &west_facing), WindClass::Offshore);
    /// assert_eq!(WindClass::classify(180.0, &west_facing), WindClass::CrossShore);
    /// assert_eq!(WindClass::classify(260.0, &west_facing), WindClass::Onshore);
    /// ```
    #[must_use]
    pub fn classify(wind_direction: f32, spot: &SpotProfile) -> Self {
        let difference = angular_difference(wind_direction, spot.offshore_bearing());
        if difference < OFFSHORE_LIMIT_DEG {
            Self::Offshore
        } else if difference <= CROSS_SHORE_LIMIT_DEG {
            Self::CrossShore
        } else {
            Self::Onshore
        }
    }

    /// Return the class as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offshore => "offshore",
            Self::CrossShore => "cross-shore",
            Self::Onshore => "onshore",
        }
    }
}

impl fmt::Display for WindClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fraction of the full directional effect at `speed`, in `0.0..=1.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "strength ramps linearly between the light and strong thresholds"
)]
#[must_use]
pub fn strength(speed: f32) -> f32 {
    ((speed - LIGHT_WIND_KMH) / (STRONG_WIND_KMH - LIGHT_WIND_KMH)).clamp(0.0, 1.0)
}

/// Multiplier in `0.0..=1.0` applied once wind exceeds a surfer's ceiling.
#[expect(
    clippy::float_arithmetic,
    reason = "the penalty grows with the excess over the ceiling"
)]
#[must_use]
pub fn tolerance_factor(speed: f32, ceiling: f32) -> f32 {
    if speed <= ceiling {
        return 1.0;
    }
    if ceiling <= 0.0 {
        return 0.0;
    }
    (1.0 - (speed - ceiling) / ceiling).max(0.0)
}

/// Wind quality sub-score in `0.0..=10.0`.
///
/// Light wind is neutral whatever its direction; stronger wind pushes the
/// score up when offshore and down when onshore. Wind above `ceiling`
/// depresses the score regardless of direction.
#[expect(
    clippy::float_arithmetic,
    reason = "the sub-score interpolates between neutral and the extremes"
)]
#[must_use]
pub fn wind_quality(class: WindClass, speed: f32, ceiling: f32) -> f32 {
    let effect = strength(speed);
    let directional = match class {
        WindClass::Offshore => NEUTRAL_WIND_SCORE + (MAX_SCORE - NEUTRAL_WIND_SCORE) * effect,
        WindClass::CrossShore => NEUTRAL_WIND_SCORE,
        WindClass::Onshore => NEUTRAL_WIND_SCORE * (1.0 - effect),
    };
    directional * tolerance_factor(speed, ceiling)
}
