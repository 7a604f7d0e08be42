//! Distance-from-ideal banding.
//!
//! A value inside its band fits perfectly. Outside, the fit falls off
//! linearly with the distance to the nearest edge, measured relative to that
//! edge, and bottoms out at zero.

use surfside_core::Band;

/// Fit lost per unit of relative distance outside a band.
pub(crate) const FALLOFF_SLOPE: f32 = 1.5;

/// Where a value sits relative to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    /// Below the lower edge.
    Below,
    /// Within the band, edges included.
    Inside,
    /// Above the upper edge.
    Above,
}

impl BandPosition {
    /// Locate `value` relative to `band`.
    #[must_use]
    pub fn of(value: f32, band: &Band) -> Self {
        if value < band.min {
            Self::Below
        } else if value > band.max {
            Self::Above
        } else {
            Self::Inside
        }
    }
}

/// Two-sided fit in `0.0..=1.0`: penalises values on either side of the band.
#[must_use]
pub fn fit(value: f32, band: &Band) -> f32 {
    match BandPosition::of(value, band) {
        BandPosition::Inside => 1.0,
        BandPosition::Below => lower_fit(value, band),
        BandPosition::Above => falloff(value - band.max, band.max),
    }
}

/// One-sided fit in `0.0..=1.0`: only values below the band are penalised.
///
/// Used for swell period, where a longer period is never worse.
#[must_use]
pub fn lower_fit(value: f32, band: &Band) -> f32 {
    if value >= band.min {
        1.0
    } else {
        falloff(band.min - value, band.min)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "linear falloff scales the relative distance"
)]
fn falloff(distance: f32, edge: f32) -> f32 {
    if edge <= 0.0 {
        return 0.0;
    }
    (1.0 - FALLOFF_SLOPE * distance / edge).clamp(0.0, 1.0)
}
