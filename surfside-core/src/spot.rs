//! Surf locations and their static orientation.

use geo::Coord;
use thiserror::Error;

use crate::angles::{normalise_bearing, reciprocal};

/// Static descriptor of a surf location used by the scoring engine.
///
/// The orientation is the compass bearing the spot faces toward open water.
///
/// # Examples
/// ```
/// use surfside_core::SpotProfile;
///
/// let west_facing = SpotProfile::new(270.0);
/// assert_eq!(west_facing.offshore_bearing(), 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpotProfile {
    orientation: f32,
}

impl SpotProfile {
    /// Build a profile, wrapping the orientation into `[0, 360)`.
    #[must_use]
    pub fn new(orientation: f32) -> Self {
        Self {
            orientation: normalise_bearing(orientation),
        }
    }

    /// Bearing the spot faces, in degrees.
    #[must_use]
    pub const fn orientation(&self) -> f32 {
        self.orientation
    }

    /// Bearing wind must come from to blow from land out to sea.
    #[must_use]
    pub fn offshore_bearing(&self) -> f32 {
        reciprocal(self.orientation)
    }
}

/// Physical character of a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SpotKind {
    /// Sand-bottom beach break.
    Beach,
    /// Reef or rock-ledge break.
    Reef,
    /// Harbour wall or pier break.
    Harbour,
    /// Sheltered bay.
    Bay,
    /// Island break.
    Island,
}

/// A named surf location in the catalogue.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use surfside_core::{Spot, SpotKind};
///
/// # fn main() -> Result<(), surfside_core::SpotError> {
/// let spot = Spot::builder("strandhill", "Strandhill")
///     .location(Coord { x: -8.61, y: 54.27 })
///     .orientation(280.0)
///     .kind(SpotKind::Beach)
///     .place("Ireland", "Sligo", "Connacht")
///     .build()?;
/// assert_eq!(spot.profile().orientation(), 280.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spot {
    /// Stable identifier, e.g. `"strandhill"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position as longitude (`x`) and latitude (`y`).
    pub location: Coord<f64>,
    /// Compass bearing the spot faces, in degrees.
    pub orientation: f32,
    /// Physical character of the break.
    pub kind: SpotKind,
    /// Country name.
    pub country: String,
    /// County name.
    pub county: String,
    /// Region grouping used by the catalogue.
    pub region: String,
}

/// Errors returned by [`SpotBuilder::build`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpotError {
    /// The identifier was empty or whitespace.
    #[error("spot id must not be empty")]
    MissingId,
    /// Latitude or longitude fell outside the valid range.
    #[error("spot {id} has an invalid location ({x}, {y})")]
    InvalidLocation {
        /// Spot identifier.
        id: String,
        /// Longitude.
        x: f64,
        /// Latitude.
        y: f64,
    },
    /// Orientation was not a finite number.
    #[error("spot {id} has a non-finite orientation")]
    InvalidOrientation {
        /// Spot identifier.
        id: String,
    },
}

impl Spot {
    /// Start building a spot with its identifier and display name.
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> SpotBuilder {
        SpotBuilder {
            id: id.into(),
            name: name.into(),
            location: Coord { x: 0.0, y: 0.0 },
            orientation: 0.0,
            kind: SpotKind::Beach,
            country: String::new(),
            county: String::new(),
            region: String::new(),
        }
    }

    /// Scoring profile for this spot.
    #[must_use]
    pub fn profile(&self) -> SpotProfile {
        SpotProfile::new(self.orientation)
    }
}

/// Builder for [`Spot`].
#[derive(Debug, Clone)]
#[must_use]
pub struct SpotBuilder {
    id: String,
    name: String,
    location: Coord<f64>,
    orientation: f32,
    kind: SpotKind,
    country: String,
    county: String,
    region: String,
}

impl SpotBuilder {
    /// Set the position (longitude `x`, latitude `y`).
    pub fn location(mut self, location: Coord<f64>) -> Self {
        self.location = location;
        self
    }

    /// Set the bearing the spot faces.
    pub fn orientation(mut self, orientation: f32) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the kind of break.
    pub fn kind(mut self, kind: SpotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the country, county, and region names.
    pub fn place(
        mut self,
        country: impl Into<String>,
        county: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        self.country = country.into();
        self.county = county.into();
        self.region = region.into();
        self
    }

    /// Validate and construct the [`Spot`].
    ///
    /// The orientation is wrapped into `[0, 360)`.
    ///
    /// # Errors
    /// Returns [`SpotError`] when the id is blank, the location lies outside
    /// valid latitude/longitude bounds, or the orientation is not finite.
    pub fn build(self) -> Result<Spot, SpotError> {
        if self.id.trim().is_empty() {
            return Err(SpotError::MissingId);
        }
        let Coord { x, y } = self.location;
        if !(-180.0..=180.0).contains(&x) || !(-90.0..=90.0).contains(&y) {
            return Err(SpotError::InvalidLocation { id: self.id, x, y });
        }
        if !self.orientation.is_finite() {
            return Err(SpotError::InvalidOrientation { id: self.id });
        }
        Ok(Spot {
            id: self.id,
            name: self.name,
            location: self.location,
            orientation: normalise_bearing(self.orientation),
            kind: self.kind,
            country: self.country,
            county: self.county,
            region: self.region,
        })
    }
}
