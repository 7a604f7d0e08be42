//! Observation sources for catalogued spots.

use std::collections::BTreeMap;

use log::warn;
use surfside_core::{Observation, ObservationReadings, Spot};

use crate::ObservationError;

/// Supplies the current observation for a spot.
pub trait ObservationSource {
    /// Fetch or decode the observation for `spot`.
    ///
    /// # Errors
    /// Returns [`ObservationError`] when no usable observation exists.
    fn observe(&self, spot: &Spot) -> Result<Observation, ObservationError>;
}

impl<S: ObservationSource + ?Sized> ObservationSource for &S {
    fn observe(&self, spot: &Spot) -> Result<Observation, ObservationError> {
        (**self).observe(spot)
    }
}

/// Readings substituted when a source cannot supply an observation.
///
/// A moderate, clean westerly swell with a light easterly breeze.
#[must_use]
pub const fn fallback_readings() -> ObservationReadings {
    ObservationReadings {
        swell_height: 1.2,
        swell_period: 11.0,
        swell_direction: 290.0,
        wave_height: 1.3,
        wave_period: 10.0,
        wind_speed_10m: 7.0,
        wind_direction: 90.0,
    }
}

/// Fixed readings keyed by spot identifier.
///
/// # Examples
/// ```
/// use surfside_data::{ObservationSource, StaticObservationSource, spot_by_id};
///
/// let json = r#"{"strandhill": {"swell_height": 1.8, "swell_period": 13.0}}"#;
/// let source = StaticObservationSource::from_json(json)?;
/// let spot = spot_by_id("strandhill").expect("catalogued spot");
/// assert_eq!(source.observe(spot)?.swell_height(), 1.8);
/// # Ok::<(), surfside_data::ObservationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticObservationSource {
    readings: BTreeMap<String, ObservationReadings>,
}

impl StaticObservationSource {
    /// Parse a JSON object mapping spot ids to readings.
    ///
    /// Readings missing a field default it to zero.
    ///
    /// # Errors
    /// Returns [`ObservationError::Decode`] when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ObservationError> {
        let readings = serde_json::from_str(json)?;
        Ok(Self { readings })
    }

    /// Add or replace the readings for `spot_id`.
    #[must_use]
    pub fn with(mut self, spot_id: impl Into<String>, readings: ObservationReadings) -> Self {
        self.readings.insert(spot_id.into(), readings);
        self
    }

    /// Number of spots with readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Report whether the source holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl ObservationSource for StaticObservationSource {
    fn observe(&self, spot: &Spot) -> Result<Observation, ObservationError> {
        self.readings
            .get(&spot.id)
            .map(|readings| Observation::new(*readings))
            .ok_or_else(|| ObservationError::UnknownSpot {
                id: spot.id.clone(),
            })
    }
}

/// Wraps a source and substitutes a fallback observation on failure.
///
/// The wrapped source's errors are logged at `warn` level and never
/// surface, so [`FallbackSource::observe`] always succeeds.
#[derive(Debug, Clone)]
pub struct FallbackSource<S> {
    inner: S,
    fallback: Observation,
}

impl<S: ObservationSource> FallbackSource<S> {
    /// Wrap `inner`, falling back to [`fallback_readings`].
    pub fn new(inner: S) -> Self {
        Self::with_fallback(inner, fallback_readings())
    }

    /// Wrap `inner`, falling back to `readings`.
    pub fn with_fallback(inner: S, readings: ObservationReadings) -> Self {
        Self {
            inner,
            fallback: Observation::new(readings),
        }
    }

    /// Observation used when the wrapped source fails.
    #[must_use]
    pub const fn fallback(&self) -> &Observation {
        &self.fallback
    }
}

impl<S: ObservationSource> ObservationSource for FallbackSource<S> {
    fn observe(&self, spot: &Spot) -> Result<Observation, ObservationError> {
        Ok(self.inner.observe(spot).unwrap_or_else(|err| {
            warn!("{}: {err}; using fallback observation", spot.id);
            self.fallback
        }))
    }
}
