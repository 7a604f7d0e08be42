//! Surfer ability tiers and their ideal-condition bands.
//!
//! Each [`AbilityTier`] maps to a fixed [`AbilityProfile`] drawn from a
//! static table, so lookups are infallible and free of shared state.
//!
//! # Examples
//! ```
//! use surfside_core::AbilityTier;
//!
//! let profile = AbilityTier::Beginner.profile();
//! assert!(profile.swell_height.contains(0.8));
//! assert_eq!(AbilityTier::resolve(Some("pro")), AbilityTier::Intermediate);
//! ```

use std::fmt;
use std::str::FromStr;

/// Inclusive range of ideal values for one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band {
    /// Lower edge of the band.
    pub min: f32,
    /// Upper edge of the band.
    pub max: f32,
}

impl Band {
    /// Build a band from its edges.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Report whether `value` lies inside the band, edges included.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Midpoint of the band.
    #[expect(
        clippy::float_arithmetic,
        reason = "the centre is the mean of both edges"
    )]
    #[must_use]
    pub fn centre(&self) -> f32 {
        (self.min + self.max) / 2.0
    }
}

/// Ideal conditions and wind tolerance for one ability tier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbilityProfile {
    /// Ideal swell height in metres.
    pub swell_height: Band,
    /// Ideal swell period in seconds.
    pub swell_period: Band,
    /// Near-surface wind speed (km/h) above which conditions become hazardous.
    pub wind_ceiling_kmh: f32,
}

const BEGINNER: AbilityProfile = AbilityProfile {
    swell_height: Band::new(0.5, 1.2),
    swell_period: Band::new(6.0, 10.0),
    wind_ceiling_kmh: 15.0,
};

const INTERMEDIATE: AbilityProfile = AbilityProfile {
    swell_height: Band::new(0.8, 2.0),
    swell_period: Band::new(8.0, 14.0),
    wind_ceiling_kmh: 25.0,
};

const ADVANCED: AbilityProfile = AbilityProfile {
    swell_height: Band::new(1.5, 3.5),
    swell_period: Band::new(11.0, 18.0),
    wind_ceiling_kmh: 35.0,
};

/// Skill classification used to recalibrate what counts as good surf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AbilityTier {
    /// Small, gentle waves and light wind.
    Beginner,
    /// The middle ground; also the fallback for unrecognised labels.
    #[default]
    Intermediate,
    /// Bigger, longer-period swell and more wind tolerance.
    Advanced,
}

impl AbilityTier {
    /// Every tier, from least to most experienced.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Return the static configuration for this tier.
    #[must_use]
    pub const fn profile(self) -> &'static AbilityProfile {
        match self {
            Self::Beginner => &BEGINNER,
            Self::Intermediate => &INTERMEDIATE,
            Self::Advanced => &ADVANCED,
        }
    }

    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Resolve an optional, untrusted label into a tier.
    ///
    /// Missing or unrecognised labels fall back to
    /// [`AbilityTier::Intermediate`].
    #[must_use]
    pub fn resolve(label: Option<&str>) -> Self {
        label
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for AbilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbilityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("unknown ability '{s}'")),
        }
    }
}
