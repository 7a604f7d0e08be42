//! Relative weighting of the three sub-scores.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when validating [`ScoreWeights`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreWeightsError {
    /// A weight was `NaN` or infinite.
    #[error("{factor} weight must be finite")]
    NonFinite {
        /// Name of the offending factor.
        factor: &'static str,
    },
    /// A weight was negative.
    #[error("{factor} weight must not be negative")]
    Negative {
        /// Name of the offending factor.
        factor: &'static str,
    },
    /// Every weight was zero.
    #[error("weights must sum to a positive value")]
    ZeroTotal,
}

/// Weights blending swell, wind, and wave-height sub-scores.
///
/// Weights are normalised by their total, so only their ratios matter.
/// Swell quality dominates by default.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Multiplier applied to the swell quality sub-score.
    pub swell: f32,
    /// Multiplier applied to the wind quality sub-score.
    pub wind: f32,
    /// Multiplier applied to the wave-height consistency sub-score.
    pub wave_height: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is not finite, is
    /// negative, or when all weights are zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (factor, weight) in self.named() {
            if !weight.is_finite() {
                return Err(ScoreWeightsError::NonFinite { factor });
            }
            if weight < 0.0 {
                return Err(ScoreWeightsError::Negative { factor });
            }
        }
        if self.swell + self.wind + self.wave_height == 0.0 {
            return Err(ScoreWeightsError::ZeroTotal);
        }
        Ok(self)
    }

    const fn named(self) -> [(&'static str, f32); 3] {
        [
            ("swell", self.swell),
            ("wind", self.wind),
            ("wave height", self.wave_height),
        ]
    }

    /// Weighted mean of the three sub-scores.
    ///
    /// Assumes the weights have been validated.
    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires weighted averages"
    )]
    pub(crate) fn blend(self, swell: f32, wind: f32, wave_height: f32) -> f32 {
        let total = self.swell + self.wind + self.wave_height;
        if total == 0.0 {
            return 0.0;
        }
        (swell * self.swell + wind * self.wind + wave_height * self.wave_height) / total
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            swell: 0.6_f32,
            wind: 0.3_f32,
            wave_height: 0.1_f32,
        }
    }
}
