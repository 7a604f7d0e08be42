//! Test-only scorers and readings shared by unit and behaviour tests.

use crate::{AbilityTier, Observation, ObservationReadings, ScoreResult, Scorer, SpotProfile};

/// Test `Scorer` that returns the same score and reason for every input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixedScorer {
    /// Raw score returned before sanitising.
    pub score: f32,
    /// Reason attached to every result, if any.
    pub reason: Option<String>,
}

impl FixedScorer {
    /// Build a scorer that always returns `score` with no reasons.
    #[must_use]
    pub const fn new(score: f32) -> Self {
        Self {
            score,
            reason: None,
        }
    }

    /// Attach a reason to every result.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl Scorer for FixedScorer {
    fn score(
        &self,
        _observation: &Observation,
        _spot: &SpotProfile,
        _ability: AbilityTier,
    ) -> ScoreResult {
        ScoreResult {
            score: Self::sanitise(self.score),
            reasons: self.reason.iter().cloned().collect(),
        }
    }
}

/// Clean, mid-sized swell with a light breeze from 225°.
///
/// Wind from 225° is offshore for a spot facing 45°.
#[must_use]
pub const fn clean_readings() -> ObservationReadings {
    ObservationReadings {
        swell_height: 1.5,
        swell_period: 12.0,
        swell_direction: 290.0,
        wave_height: 1.5,
        wave_period: 11.0,
        wind_speed_10m: 8.0,
        wind_direction: 225.0,
    }
}
