//! Ordered reason rules.
//!
//! Each rule inspects an [`Assessment`] and contributes at most one message.
//! Rules run in table order, which groups them swell first, then wind, then
//! wave height.

use crate::assessment::Assessment;
use crate::banding::BandPosition;
use crate::wind::{LIGHT_WIND_KMH, WindClass};

/// Near-surface speed (km/h) at which onshore wind is reported as strong.
pub const STRONG_ONSHORE_KMH: f32 = 20.0;

/// Fit below which a measurement is reported as poor.
const POOR_FIT: f32 = 0.5;

/// Height (m) by which wave height must exceed swell height to flag wind chop.
const WIND_CHOP_MARGIN_M: f32 = 0.5;

/// Measurement family a rule reports on, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Factor {
    Swell,
    Wind,
    WaveHeight,
}

pub(crate) struct ReasonRule {
    factor: Factor,
    applies: fn(&Assessment) -> bool,
    message: fn(&Assessment) -> String,
}

pub(crate) const RULES: &[ReasonRule] = &[
    ReasonRule {
        factor: Factor::Swell,
        applies: |a| a.swell_height_position == BandPosition::Inside,
        message: |a| {
            format!(
                "Swell height of {:.1}m suits {} surfers",
                a.swell_height, a.ability
            )
        },
    },
    ReasonRule {
        factor: Factor::Swell,
        applies: |a| {
            a.swell_height_position == BandPosition::Below && a.swell_height_fit < POOR_FIT
        },
        message: |a| {
            format!(
                "Swell of {:.1}m is too small for {} surfers",
                a.swell_height, a.ability
            )
        },
    },
    ReasonRule {
        factor: Factor::Swell,
        applies: |a| {
            a.swell_height_position == BandPosition::Above && a.swell_height_fit < POOR_FIT
        },
        message: |a| {
            format!(
                "Swell of {:.1}m is too big for {} surfers",
                a.swell_height, a.ability
            )
        },
    },
    ReasonRule {
        factor: Factor::Swell,
        applies: |a| a.swell_period_position == BandPosition::Inside,
        message: |a| format!("Swell period of {:.1}s is in the ideal range", a.swell_period),
    },
    ReasonRule {
        factor: Factor::Swell,
        applies: |a| a.swell_period_position == BandPosition::Above,
        message: |a| {
            format!(
                "Long-period swell ({:.1}s) adds power and shape",
                a.swell_period
            )
        },
    },
    ReasonRule {
        factor: Factor::Swell,
        applies: |a| a.swell_period_quality < POOR_FIT,
        message: |a| {
            format!(
                "Short swell period ({:.1}s) makes for weak, disorganised waves",
                a.swell_period
            )
        },
    },
    ReasonRule {
        factor: Factor::Wind,
        applies: |a| a.wind_speed < LIGHT_WIND_KMH,
        message: |a| {
            format!(
                "Light winds ({:.1} km/h) leave the surface clean",
                a.wind_speed
            )
        },
    },
    ReasonRule {
        factor: Factor::Wind,
        applies: |a| {
            a.wind_class == WindClass::Offshore
                && a.wind_speed >= LIGHT_WIND_KMH
                && a.wind_speed <= a.profile.wind_ceiling_kmh
        },
        message: |a| {
            format!(
                "Offshore wind ({:.1} km/h) is grooming the wave faces",
                a.wind_speed
            )
        },
    },
    ReasonRule {
        factor: Factor::Wind,
        applies: |a| a.wind_class == WindClass::Onshore && a.wind_speed >= STRONG_ONSHORE_KMH,
        message: |a| {
            format!(
                "Strong onshore wind ({:.1} km/h) is making conditions choppy",
                a.wind_speed
            )
        },
    },
    ReasonRule {
        factor: Factor::Wind,
        applies: |a| {
            a.wind_class == WindClass::Onshore
                && a.wind_speed >= LIGHT_WIND_KMH
                && a.wind_speed < STRONG_ONSHORE_KMH
        },
        message: |a| {
            format!(
                "Onshore wind ({:.1} km/h) is roughening the wave faces",
                a.wind_speed
            )
        },
    },
    ReasonRule {
        factor: Factor::Wind,
        applies: |a| a.wind_speed > a.profile.wind_ceiling_kmh,
        message: |a| {
            format!(
                "Wind of {:.1} km/h exceeds the comfortable limit for {} surfers",
                a.wind_speed, a.ability
            )
        },
    },
    ReasonRule {
        factor: Factor::WaveHeight,
        applies: |a| wind_chop(a) >= WIND_CHOP_MARGIN_M,
        message: |a| {
            format!(
                "Local wind chop is pushing wave height to {:.1}m",
                a.wave_height
            )
        },
    },
    ReasonRule {
        factor: Factor::WaveHeight,
        applies: |a| a.wave_height_fit < POOR_FIT,
        message: |a| {
            format!(
                "Overall wave height of {:.1}m is outside the ideal range for {} surfers",
                a.wave_height, a.ability
            )
        },
    },
];

#[expect(
    clippy::float_arithmetic,
    reason = "wind chop is the excess of wave height over swell height"
)]
fn wind_chop(assessment: &Assessment) -> f32 {
    assessment.wave_height - assessment.swell_height
}

/// Collect the message of every rule that applies, in table order.
#[must_use]
pub fn explain(assessment: &Assessment) -> Vec<String> {
    debug_assert!(RULES.is_sorted_by_key(|rule| rule.factor));
    RULES
        .iter()
        .filter(|rule| (rule.applies)(assessment))
        .map(|rule| (rule.message)(assessment))
        .collect()
}
