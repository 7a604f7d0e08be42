//! Built-in catalogue of surf spots.
//!
//! Orientation is the compass bearing a spot faces out to sea, so the
//! offshore wind for a west-facing beach (270°) blows from the east.

use std::sync::LazyLock;

use geo::Coord;
use surfside_core::{Spot, SpotKind};

const IRELAND: &str = "Ireland";
const CONNACHT: &str = "Connacht";

struct Entry {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lon: f64,
    orientation: f32,
    kind: SpotKind,
    county: &'static str,
}

const CONNACHT_SPOTS: &[Entry] = &[
    Entry {
        id: "strandhill",
        name: "Strandhill",
        lat: 54.2717,
        lon: -8.6076,
        orientation: 280.0,
        kind: SpotKind::Beach,
        county: "Sligo",
    },
    Entry {
        id: "easkey",
        name: "Easkey",
        lat: 54.2895,
        lon: -8.9610,
        orientation: 0.0,
        kind: SpotKind::Reef,
        county: "Sligo",
    },
    Entry {
        id: "enniscrone",
        name: "Enniscrone",
        lat: 54.2148,
        lon: -9.0951,
        orientation: 315.0,
        kind: SpotKind::Beach,
        county: "Sligo",
    },
    Entry {
        id: "mullaghmore",
        name: "Mullaghmore Head",
        lat: 54.4667,
        lon: -8.4500,
        orientation: 315.0,
        kind: SpotKind::Reef,
        county: "Sligo",
    },
    Entry {
        id: "streedagh",
        name: "Streedagh",
        lat: 54.4126,
        lon: -8.5683,
        orientation: 320.0,
        kind: SpotKind::Beach,
        county: "Sligo",
    },
    Entry {
        id: "keem-bay",
        name: "Keem Bay",
        lat: 53.9686,
        lon: -10.1950,
        orientation: 225.0,
        kind: SpotKind::Bay,
        county: "Mayo",
    },
    Entry {
        id: "keel",
        name: "Keel Strand",
        lat: 53.9765,
        lon: -10.0842,
        orientation: 210.0,
        kind: SpotKind::Beach,
        county: "Mayo",
    },
    Entry {
        id: "carrowniskey",
        name: "Carrowniskey",
        lat: 53.7203,
        lon: -9.8889,
        orientation: 270.0,
        kind: SpotKind::Beach,
        county: "Mayo",
    },
    Entry {
        id: "lettergesh",
        name: "Lettergesh",
        lat: 53.6186,
        lon: -9.8640,
        orientation: 340.0,
        kind: SpotKind::Beach,
        county: "Galway",
    },
    Entry {
        id: "inishbofin",
        name: "Inishbofin",
        lat: 53.6147,
        lon: -10.2160,
        orientation: 250.0,
        kind: SpotKind::Island,
        county: "Galway",
    },
];

static SPOTS: LazyLock<Vec<Spot>> = LazyLock::new(|| {
    CONNACHT_SPOTS
        .iter()
        .map(|entry| Spot {
            id: entry.id.to_owned(),
            name: entry.name.to_owned(),
            location: Coord {
                x: entry.lon,
                y: entry.lat,
            },
            orientation: entry.orientation,
            kind: entry.kind,
            country: IRELAND.to_owned(),
            county: entry.county.to_owned(),
            region: CONNACHT.to_owned(),
        })
        .collect()
});

/// Every catalogued spot, grouped by region.
#[must_use]
pub fn all_spots() -> &'static [Spot] {
    &SPOTS
}

/// Look up a spot by its identifier.
#[must_use]
pub fn spot_by_id(id: &str) -> Option<&'static Spot> {
    all_spots().iter().find(|spot| spot.id == id)
}

/// Spots in `region`, in catalogue order.
#[must_use]
pub fn spots_by_region(region: &str) -> Vec<&'static Spot> {
    all_spots()
        .iter()
        .filter(|spot| spot.region == region)
        .collect()
}

/// Spots in `country`, in catalogue order.
#[must_use]
pub fn spots_by_country(country: &str) -> Vec<&'static Spot> {
    all_spots()
        .iter()
        .filter(|spot| spot.country == country)
        .collect()
}
