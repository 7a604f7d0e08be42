//! Compass bearing helpers.
//!
//! Bearings are expressed in degrees clockwise from north and normalised
//! into `[0.0, 360.0)`.
//!
//! # Examples
//! ```
//! use surfside_core::angles::{angular_difference, normalise_bearing};
//!
//! assert_eq!(normalise_bearing(-90.0), 270.0);
//! assert_eq!(angular_difference(350.0, 10.0), 20.0);
//! ```

/// Degrees in a full turn.
pub const FULL_TURN: f32 = 360.0;

/// Degrees in a half turn.
pub const HALF_TURN: f32 = 180.0;

/// Wrap a bearing into `[0.0, 360.0)`.
///
/// Non-finite bearings carry no direction and collapse to `0.0`.
#[must_use]
pub fn normalise_bearing(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Smallest unsigned angle between two bearings, in `[0.0, 180.0]`.
#[expect(
    clippy::float_arithmetic,
    reason = "circular distance is computed from wrapped bearings"
)]
#[must_use]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let delta = (normalise_bearing(a) - normalise_bearing(b)).abs();
    if delta > HALF_TURN {
        FULL_TURN - delta
    } else {
        delta
    }
}

/// Bearing pointing the opposite way.
#[expect(
    clippy::float_arithmetic,
    reason = "the reciprocal bearing adds a half turn"
)]
#[must_use]
pub fn reciprocal(degrees: f32) -> f32 {
    normalise_bearing(normalise_bearing(degrees) + HALF_TURN)
}
