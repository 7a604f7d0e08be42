//! Core domain types for the Surfside engine.
//!
//! The crate models marine observations, surf spots, and surfer ability
//! tiers, together with the wind profile model that converts mast-height
//! wind into near-surface wind. Scoring implementations plug in through the
//! [`Scorer`] trait.
//!
//! Everything here is a plain value: constructors normalise input rather
//! than reject it wherever a usable value exists, and validating
//! constructors return `Result` where no sensible normalisation exists.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ability;
pub mod angles;
pub mod observation;
pub mod scorer;
pub mod spot;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod wind;

pub use ability::{AbilityProfile, AbilityTier, Band};
pub use observation::{Observation, ObservationReadings};
pub use scorer::{MAX_SCORE, ScoreResult, Scorer};
pub use spot::{Spot, SpotBuilder, SpotError, SpotKind, SpotProfile};
pub use wind::{PowerLawProfile, WindProfileError, wind_at_2m};
