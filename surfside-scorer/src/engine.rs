//! The weighted surf scoring engine.

use log::debug;
use surfside_core::{AbilityTier, Observation, ScoreResult, Scorer, SpotProfile};

use crate::assessment::Assessment;
use crate::reasons::explain;
use crate::weights::{ScoreWeights, ScoreWeightsError};

/// Scores surf conditions from swell, wind, and wave height.
///
/// Each call builds an [`Assessment`], blends its sub-scores with the
/// configured [`ScoreWeights`], and explains the result with the ordered
/// reason rules.
///
/// # Examples
/// ```
/// use surfside_core::{AbilityTier, Observation, ObservationReadings, Scorer, SpotProfile};
/// use surfside_scorer::SurfScorer;
///
/// let observation = Observation::new(ObservationReadings {
///     swell_height: 1.5,
///     swell_period: 12.0,
///     wave_height: 1.5,
///     wind_speed_10m: 8.0,
///     wind_direction: 225.0,
///     ..ObservationReadings::default()
/// });
/// let result = SurfScorer::default().score(
///     &observation,
///     &SpotProfile::new(45.0),
///     AbilityTier::Intermediate,
/// );
/// assert!(result.score > 7.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfScorer {
    weights: ScoreWeights,
}

impl SurfScorer {
    /// Build a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the weights fail validation.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights used to blend sub-scores.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score an observation and return the intermediate assessment with it.
    #[must_use]
    pub fn assess(
        &self,
        observation: &Observation,
        spot: &SpotProfile,
        ability: AbilityTier,
    ) -> (Assessment, ScoreResult) {
        let assessment = Assessment::new(observation, spot, ability);
        let raw = self.weights.blend(
            assessment.swell_score,
            assessment.wind_score,
            assessment.wave_height_score,
        );
        debug!(
            "{ability} at {:.0}°: swell {:.2}, wind {:.2} ({}), wave height {:.2} -> {raw:.2}",
            spot.orientation(),
            assessment.swell_score,
            assessment.wind_score,
            assessment.wind_class,
            assessment.wave_height_score,
        );
        let result = ScoreResult {
            score: Self::sanitise(raw),
            reasons: explain(&assessment),
        };
        (assessment, result)
    }
}

impl Scorer for SurfScorer {
    fn score(
        &self,
        observation: &Observation,
        spot: &SpotProfile,
        ability: AbilityTier,
    ) -> ScoreResult {
        self.assess(observation, spot, ability).1
    }
}
