//! Decoding of Open-Meteo hourly responses.
//!
//! Marine readings (swell and combined waves) and wind readings come from
//! two separate endpoints. [`OpenMeteoPayload`] pairs both bodies and
//! extracts one hour as [`ObservationReadings`]. Fetching the bodies is the
//! caller's concern.

use serde::Deserialize;
use surfside_core::{Observation, ObservationReadings};

use crate::ObservationError;

#[derive(Debug, Deserialize)]
struct Envelope<H> {
    hourly: Option<H>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct MarineHourly {
    swell_wave_height: Vec<Option<f32>>,
    swell_wave_period: Vec<Option<f32>>,
    swell_wave_direction: Vec<Option<f32>>,
    wave_height: Vec<Option<f32>>,
    wave_period: Vec<Option<f32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ForecastHourly {
    wind_speed_10m: Vec<Option<f32>>,
    wind_direction_10m: Vec<Option<f32>>,
}

/// Paired marine and forecast responses for one location.
///
/// # Examples
/// ```
/// use surfside_data::OpenMeteoPayload;
///
/// let marine = r#"{"hourly": {"swell_wave_height": [1.26], "swell_wave_period": [11.04]}}"#;
/// let forecast = r#"{"hourly": {"wind_speed_10m": [14.35], "wind_direction_10m": [87.6]}}"#;
/// let payload = OpenMeteoPayload::from_json(marine, forecast)?;
/// let readings = payload.readings_at(0);
/// assert_eq!(readings.swell_height, 1.3);
/// assert_eq!(readings.wind_direction, 88.0);
/// assert_eq!(readings.wave_height, 0.0);
/// # Ok::<(), surfside_data::ObservationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OpenMeteoPayload {
    marine: MarineHourly,
    forecast: ForecastHourly,
}

impl OpenMeteoPayload {
    /// Decode the marine and forecast response bodies.
    ///
    /// # Errors
    /// Returns [`ObservationError::Decode`] for malformed JSON and
    /// [`ObservationError::MissingHourly`] when either body lacks an
    /// `hourly` block.
    pub fn from_json(marine_body: &str, forecast_body: &str) -> Result<Self, ObservationError> {
        let marine: Envelope<MarineHourly> = serde_json::from_str(marine_body)?;
        let forecast: Envelope<ForecastHourly> = serde_json::from_str(forecast_body)?;
        Ok(Self {
            marine: marine
                .hourly
                .ok_or(ObservationError::MissingHourly { dataset: "marine" })?,
            forecast: forecast
                .hourly
                .ok_or(ObservationError::MissingHourly {
                    dataset: "forecast",
                })?,
        })
    }

    /// Number of hours covered by the longest series.
    #[must_use]
    pub fn hours(&self) -> usize {
        [
            self.marine.swell_wave_height.len(),
            self.marine.swell_wave_period.len(),
            self.marine.swell_wave_direction.len(),
            self.marine.wave_height.len(),
            self.marine.wave_period.len(),
            self.forecast.wind_speed_10m.len(),
            self.forecast.wind_direction_10m.len(),
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
    }

    /// Readings for `hour`, counted from the start of the series.
    ///
    /// Absent or null values read as zero. Magnitudes are rounded to one
    /// decimal place and directions to whole degrees.
    #[must_use]
    pub fn readings_at(&self, hour: usize) -> ObservationReadings {
        ObservationReadings {
            swell_height: tenths(value_at(&self.marine.swell_wave_height, hour)),
            swell_period: tenths(value_at(&self.marine.swell_wave_period, hour)),
            swell_direction: value_at(&self.marine.swell_wave_direction, hour).round(),
            wave_height: tenths(value_at(&self.marine.wave_height, hour)),
            wave_period: tenths(value_at(&self.marine.wave_period, hour)),
            wind_speed_10m: tenths(value_at(&self.forecast.wind_speed_10m, hour)),
            wind_direction: value_at(&self.forecast.wind_direction_10m, hour).round(),
        }
    }

    /// Normalised observation for `hour`.
    #[must_use]
    pub fn observation_at(&self, hour: usize) -> Observation {
        Observation::new(self.readings_at(hour))
    }
}

fn value_at(series: &[Option<f32>], hour: usize) -> f32 {
    series.get(hour).copied().flatten().unwrap_or_default()
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to one decimal scales by ten"
)]
fn tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const MARINE: &str = r#"{
        "latitude": 54.25,
        "hourly": {
            "time": ["2025-01-01T00:00", "2025-01-01T01:00"],
            "swell_wave_height": [1.84, 2.05],
            "swell_wave_period": [12.36, 12.9],
            "swell_wave_direction": [287.4, 291.6],
            "wave_height": [2.12, null],
            "wave_period": [10.04, 10.5]
        }
    }"#;

    const FORECAST: &str = r#"{
        "hourly": {
            "wind_speed_10m": [11.26, 15.0, 18.2],
            "wind_direction_10m": [95.5, 100.0, 110.0]
        }
    }"#;

    #[fixture]
    fn payload() -> OpenMeteoPayload {
        OpenMeteoPayload::from_json(MARINE, FORECAST).expect("valid payload")
    }

    #[rstest]
    fn decodes_and_rounds_first_hour(payload: OpenMeteoPayload) {
        let readings = payload.readings_at(0);
        assert_eq!(
            readings,
            ObservationReadings {
                swell_height: 1.8,
                swell_period: 12.4,
                swell_direction: 287.0,
                wave_height: 2.1,
                wave_period: 10.0,
                wind_speed_10m: 11.3,
                wind_direction: 96.0,
            }
        );
    }

    #[rstest]
    fn nulls_and_short_series_read_as_zero(payload: OpenMeteoPayload) {
        assert_eq!(payload.readings_at(1).wave_height, 0.0);
        let beyond_marine = payload.readings_at(2);
        assert_eq!(beyond_marine.swell_height, 0.0);
        assert_eq!(beyond_marine.wind_speed_10m, 18.2);
    }

    #[rstest]
    fn counts_hours_from_longest_series(payload: OpenMeteoPayload) {
        assert_eq!(payload.hours(), 3);
    }

    #[rstest]
    #[case("{}", FORECAST, "marine")]
    #[case(MARINE, r#"{"latitude": 54.25}"#, "forecast")]
    fn missing_hourly_block_is_an_error(
        #[case] marine: &str,
        #[case] forecast: &str,
        #[case] expected: &str,
    ) {
        let err = OpenMeteoPayload::from_json(marine, forecast).expect_err("missing hourly");
        assert!(
            matches!(err, ObservationError::MissingHourly { dataset } if dataset == expected),
            "unexpected error: {err}"
        );
    }

    #[rstest]
    fn observation_derives_near_surface_wind(payload: OpenMeteoPayload) {
        let observation = payload.observation_at(0);
        assert!(observation.wind_speed_2m() < observation.wind_speed_10m());
    }
}
