//! Score surf conditions for a surfer's ability.
//!
//! The `Scorer` trait turns an [`Observation`](crate::Observation) at a
//! [`SpotProfile`](crate::SpotProfile) into a [`ScoreResult`] for one
//! [`AbilityTier`](crate::AbilityTier).

use crate::{AbilityTier, Observation, SpotProfile};

/// Highest attainable score.
pub const MAX_SCORE: f32 = 10.0;

/// A bounded quality score and the reasons behind it.
///
/// `score` always lies in `0.0..=10.0`. `reasons` are listed in evaluation
/// order and may be empty when nothing notable was found.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Overall quality in `0.0..=10.0`.
    pub score: f32,
    /// Human-readable explanations in evaluation order.
    pub reasons: Vec<String>,
}

/// Calculate a surfability score for a spot.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so many spots can
/// be scored in parallel without coordination. The method is infallible and
/// must be deterministic: identical inputs yield identical results.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Keep scores within `0.0..=10.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use surfside_core::{
///     AbilityTier, Observation, ObservationReadings, ScoreResult, Scorer, SpotProfile,
/// };
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(
///         &self,
///         _observation: &Observation,
///         _spot: &SpotProfile,
///         _ability: AbilityTier,
///     ) -> ScoreResult {
///         ScoreResult { score: Self::sanitise(12.0), reasons: Vec::new() }
///     }
/// }
///
/// let observation = Observation::new(ObservationReadings::default());
/// let result = FlatScorer.score(&observation, &SpotProfile::new(270.0), AbilityTier::Beginner);
/// assert_eq!(result.score, 10.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Score `observation` at `spot` for a surfer of `ability`.
    fn score(
        &self,
        observation: &Observation,
        spot: &SpotProfile,
        ability: AbilityTier,
    ) -> ScoreResult;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=10.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}
