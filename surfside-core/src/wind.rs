//! Vertical wind profile: extrapolate mast-height wind to the wave surface.
//!
//! Wind is reported at the standard 10 m meteorological height, but what
//! shapes a breaking wave is the slower flow a couple of metres above the
//! water. [`PowerLawProfile`] applies the boundary-layer power law
//! `v_target = v_ref * (h_target / h_ref)^alpha`.
//!
//! # Examples
//! ```
//! use surfside_core::wind_at_2m;
//!
//! let near_surface = wind_at_2m(20.0);
//! assert!(near_surface < 20.0);
//! assert_eq!(wind_at_2m(0.0), 0.0);
//! ```

use thiserror::Error;

/// Standard meteorological measurement height in metres.
pub const REFERENCE_HEIGHT_M: f32 = 10.0;

/// Height representative of wind acting on a breaking wave, in metres.
pub const NEAR_SURFACE_HEIGHT_M: f32 = 2.0;

/// Power-law exponent for near-neutral stability over open coastal terrain.
pub const COASTAL_EXPONENT: f32 = 0.11;

/// Errors returned by [`PowerLawProfile::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindProfileError {
    /// A height was zero, negative, or not finite.
    #[error("profile heights must be finite and positive (got {height})")]
    InvalidHeight {
        /// Offending height in metres.
        height: f32,
    },
    /// The target height lies above the reference height.
    #[error("target height {target} m must not exceed reference height {reference} m")]
    TargetAboveReference {
        /// Requested target height in metres.
        target: f32,
        /// Requested reference height in metres.
        reference: f32,
    },
    /// The exponent was outside `[0.0, 1.0]`.
    #[error("power-law exponent must lie within 0.0..=1.0 (got {exponent})")]
    InvalidExponent {
        /// Offending exponent.
        exponent: f32,
    },
}

/// Power-law model of wind speed against height.
///
/// Accepted profiles always attenuate: the target height never exceeds the
/// reference height, so extrapolated speeds never exceed the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawProfile {
    reference_height_m: f32,
    target_height_m: f32,
    exponent: f32,
    factor: f32,
}

impl PowerLawProfile {
    /// Validate and construct a profile.
    ///
    /// # Errors
    /// Returns [`WindProfileError`] when a height is not a positive finite
    /// number, the target sits above the reference, or the exponent falls
    /// outside `[0.0, 1.0]`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the attenuation factor is a ratio of heights"
    )]
    pub fn new(
        reference_height_m: f32,
        target_height_m: f32,
        exponent: f32,
    ) -> Result<Self, WindProfileError> {
        for height in [reference_height_m, target_height_m] {
            if !height.is_finite() || height <= 0.0 {
                return Err(WindProfileError::InvalidHeight { height });
            }
        }
        if target_height_m > reference_height_m {
            return Err(WindProfileError::TargetAboveReference {
                target: target_height_m,
                reference: reference_height_m,
            });
        }
        if !(0.0..=1.0).contains(&exponent) {
            return Err(WindProfileError::InvalidExponent { exponent });
        }
        let factor = (target_height_m / reference_height_m).powf(exponent).min(1.0);
        Ok(Self {
            reference_height_m,
            target_height_m,
            exponent,
            factor,
        })
    }

    /// Height the input speed was measured at, in metres.
    #[must_use]
    pub const fn reference_height_m(&self) -> f32 {
        self.reference_height_m
    }

    /// Height the output speed is estimated for, in metres.
    #[must_use]
    pub const fn target_height_m(&self) -> f32 {
        self.target_height_m
    }

    /// Power-law exponent.
    #[must_use]
    pub const fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Multiplier applied to reference speeds, in `(0.0, 1.0]`.
    #[must_use]
    pub const fn factor(&self) -> f32 {
        self.factor
    }

    /// Estimate the wind speed at the target height.
    ///
    /// Negative and `NaN` speeds are treated as calm.
    #[expect(
        clippy::float_arithmetic,
        reason = "the power law scales the input speed"
    )]
    #[must_use]
    pub fn extrapolate(&self, speed_ref: f32) -> f32 {
        let speed = if speed_ref.is_nan() {
            0.0
        } else {
            speed_ref.max(0.0)
        };
        speed * self.factor
    }
}

impl Default for PowerLawProfile {
    #[expect(
        clippy::float_arithmetic,
        reason = "the default factor is derived from the standard heights"
    )]
    fn default() -> Self {
        Self {
            reference_height_m: REFERENCE_HEIGHT_M,
            target_height_m: NEAR_SURFACE_HEIGHT_M,
            exponent: COASTAL_EXPONENT,
            factor: (NEAR_SURFACE_HEIGHT_M / REFERENCE_HEIGHT_M).powf(COASTAL_EXPONENT),
        }
    }
}

/// Estimate the near-surface (2 m) wind speed from a 10 m reading.
///
/// Total over all inputs: negative and `NaN` speeds yield `0.0`.
#[must_use]
pub fn wind_at_2m(speed_ref: f32) -> f32 {
    PowerLawProfile::default().extrapolate(speed_ref)
}
