//! Data adapters for the Surfside engine.
//!
//! Responsibilities:
//! - Provide the built-in spot catalogue.
//! - Define the [`ObservationSource`] trait and its adapters: fixed
//!   readings, Open-Meteo responses, and a fallback wrapper.
//! - Turn scored observations into [`ConditionsRecord`]s for persistence
//!   and presentation.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `surfside-scorer`).
//! - No network I/O; callers fetch response bodies themselves.

#![forbid(unsafe_code)]

use surfside_core::{AbilityTier, Scorer, Spot};
use thiserror::Error;

mod open_meteo;
mod record;
mod source;
pub mod spots;

pub use open_meteo::OpenMeteoPayload;
pub use record::{ConditionsRecord, Rating};
pub use source::{FallbackSource, ObservationSource, StaticObservationSource, fallback_readings};
pub use spots::{all_spots, spot_by_id, spots_by_country, spots_by_region};

/// Errors raised while obtaining an observation.
#[derive(Debug, Error)]
pub enum ObservationError {
    /// A response body had no `hourly` block.
    #[error("{dataset} response is missing hourly data")]
    MissingHourly {
        /// Which response was incomplete.
        dataset: &'static str,
    },
    /// A payload was not valid JSON of the expected shape.
    #[error("failed to decode observation payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// The source holds nothing for the requested spot.
    #[error("no observation for spot '{id}'")]
    UnknownSpot {
        /// Identifier of the spot.
        id: String,
    },
}

/// Observe and score one spot.
///
/// # Errors
/// Propagates the source's [`ObservationError`].
pub fn assess_spot<S, Sc>(
    source: &S,
    spot: &Spot,
    ability: AbilityTier,
    scorer: &Sc,
) -> Result<ConditionsRecord, ObservationError>
where
    S: ObservationSource + ?Sized,
    Sc: Scorer + ?Sized,
{
    let observation = source.observe(spot)?;
    let result = scorer.score(&observation, &spot.profile(), ability);
    Ok(ConditionsRecord::new(spot, &observation, result))
}

/// Observe and score each spot in order.
///
/// Wrap the source in [`FallbackSource`] to score every spot even when
/// observations are missing.
///
/// # Errors
/// Returns the first [`ObservationError`] raised by the source.
pub fn assess_spots<'a, S, Sc>(
    source: &S,
    spots: impl IntoIterator<Item = &'a Spot>,
    ability: AbilityTier,
    scorer: &Sc,
) -> Result<Vec<ConditionsRecord>, ObservationError>
where
    S: ObservationSource + ?Sized,
    Sc: Scorer + ?Sized,
{
    spots
        .into_iter()
        .map(|spot| assess_spot(source, spot, ability, scorer))
        .collect()
}

#[cfg(test)]
mod tests;
