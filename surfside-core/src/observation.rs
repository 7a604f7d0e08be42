//! Environmental readings for one spot at one instant.
//!
//! Observations are built from [`ObservationReadings`], which carry the
//! reference-height wind only; the near-surface wind is always derived via
//! [`wind_at_2m`](crate::wind_at_2m). Construction normalises every field, so
//! an [`Observation`] never holds negative magnitudes or unwrapped bearings.

use crate::angles::normalise_bearing;
use crate::wind::wind_at_2m;

/// Raw readings as supplied by an observation source.
///
/// Values may be out of range; [`Observation::new`] normalises them. Missing
/// fields deserialise as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ObservationReadings {
    /// Swell height in metres.
    pub swell_height: f32,
    /// Swell period in seconds.
    pub swell_period: f32,
    /// Direction the swell arrives from, in degrees.
    pub swell_direction: f32,
    /// Combined sea-surface height in metres.
    pub wave_height: f32,
    /// Combined sea-surface period in seconds.
    pub wave_period: f32,
    /// Wind speed at 10 m, in km/h.
    pub wind_speed_10m: f32,
    /// Direction the wind blows from, in degrees.
    pub wind_direction: f32,
}

/// A normalised snapshot of marine and wind conditions.
///
/// # Examples
/// ```
/// use surfside_core::{Observation, ObservationReadings};
///
/// let observation = Observation::new(ObservationReadings {
///     swell_height: -1.0,
///     wind_speed_10m: 10.0,
///     wind_direction: 400.0,
///     ..ObservationReadings::default()
/// });
/// assert_eq!(observation.swell_height(), 0.0);
/// assert_eq!(observation.wind_direction(), 40.0);
/// assert!(observation.wind_speed_2m() < observation.wind_speed_10m());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ObservationReadings")
)]
pub struct Observation {
    swell_height: f32,
    swell_period: f32,
    swell_direction: f32,
    wave_height: f32,
    wave_period: f32,
    wind_speed_10m: f32,
    wind_speed_2m: f32,
    wind_direction: f32,
}

impl Observation {
    /// Normalise raw readings and derive the near-surface wind speed.
    #[must_use]
    pub fn new(readings: ObservationReadings) -> Self {
        let wind_speed_10m = non_negative(readings.wind_speed_10m);
        Self {
            swell_height: non_negative(readings.swell_height),
            swell_period: non_negative(readings.swell_period),
            swell_direction: normalise_bearing(readings.swell_direction),
            wave_height: non_negative(readings.wave_height),
            wave_period: non_negative(readings.wave_period),
            wind_speed_10m,
            wind_speed_2m: wind_at_2m(wind_speed_10m),
            wind_direction: normalise_bearing(readings.wind_direction),
        }
    }

    /// Swell height in metres.
    #[must_use]
    pub const fn swell_height(&self) -> f32 {
        self.swell_height
    }

    /// Swell period in seconds.
    #[must_use]
    pub const fn swell_period(&self) -> f32 {
        self.swell_period
    }

    /// Swell direction in degrees, `[0, 360)`.
    #[must_use]
    pub const fn swell_direction(&self) -> f32 {
        self.swell_direction
    }

    /// Combined wave height in metres.
    #[must_use]
    pub const fn wave_height(&self) -> f32 {
        self.wave_height
    }

    /// Combined wave period in seconds.
    #[must_use]
    pub const fn wave_period(&self) -> f32 {
        self.wave_period
    }

    /// Wind speed at the 10 m reference height, in km/h.
    #[must_use]
    pub const fn wind_speed_10m(&self) -> f32 {
        self.wind_speed_10m
    }

    /// Derived near-surface wind speed at 2 m, in km/h.
    #[must_use]
    pub const fn wind_speed_2m(&self) -> f32 {
        self.wind_speed_2m
    }

    /// Wind direction in degrees, `[0, 360)`.
    #[must_use]
    pub const fn wind_direction(&self) -> f32 {
        self.wind_direction
    }

    /// Return the readings this observation was normalised into.
    #[must_use]
    pub const fn readings(&self) -> ObservationReadings {
        ObservationReadings {
            swell_height: self.swell_height,
            swell_period: self.swell_period,
            swell_direction: self.swell_direction,
            wave_height: self.wave_height,
            wave_period: self.wave_period,
            wind_speed_10m: self.wind_speed_10m,
            wind_direction: self.wind_direction,
        }
    }
}

impl From<ObservationReadings> for Observation {
    fn from(readings: ObservationReadings) -> Self {
        Self::new(readings)
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn readings() -> ObservationReadings {
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

    #[rstest]
    fn derives_near_surface_wind(readings: ObservationReadings) {
        let observation = Observation::new(readings);
        assert_eq!(observation.wind_speed_2m(), wind_at_2m(8.0));
        assert!(observation.wind_speed_2m() < observation.wind_speed_10m());
    }

    #[rstest]
    fn clamps_negative_and_non_finite_magnitudes(readings: ObservationReadings) {
        let observation = Observation::new(ObservationReadings {
            swell_height: -0.5,
            swell_period: f32::NAN,
            wave_height: f32::NEG_INFINITY,
            wave_period: -3.0,
            wind_speed_10m: -12.0,
            ..readings
        });
        assert_eq!(observation.swell_height(), 0.0);
        assert_eq!(observation.swell_period(), 0.0);
        assert_eq!(observation.wave_height(), 0.0);
        assert_eq!(observation.wave_period(), 0.0);
        assert_eq!(observation.wind_speed_10m(), 0.0);
        assert_eq!(observation.wind_speed_2m(), 0.0);
    }

    #[rstest]
    fn wraps_directions(readings: ObservationReadings) {
        let observation = Observation::new(ObservationReadings {
            swell_direction: -70.0,
            wind_direction: 585.0,
            ..readings
        });
        assert!((observation.swell_direction() - 290.0).abs() < 1e-4);
        assert!((observation.wind_direction() - 225.0).abs() < 1e-4);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_recomputes_near_surface_wind() {
        let json = r#"{
            "swell_height": 1.0,
            "swell_period": 10.0,
            "swell_direction": 270.0,
            "wave_height": 1.1,
            "wave_period": 9.0,
            "wind_speed_10m": 20.0,
            "wind_speed_2m": 99.0,
            "wind_direction": 90.0
        }"#;
        let observation: Observation = serde_json::from_str(json).expect("valid observation");
        assert_eq!(observation.wind_speed_2m(), wind_at_2m(20.0));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_derived_wind(readings: ObservationReadings) {
        let observation = Observation::new(readings);
        let value = serde_json::to_value(observation).expect("serialise observation");
        assert!(value.get("wind_speed_2m").is_some());
        let back: Observation = serde_json::from_value(value).expect("deserialise observation");
        assert_eq!(back, observation);
    }
}
