//! `spots` command: list the catalogue.

use std::io::Write;

use clap::Args;
use surfside_core::Spot;
use surfside_data::{all_spots, spots_by_country, spots_by_region};

use crate::{ARG_COUNTRY, ARG_REGION, CliError, emit};

/// CLI arguments for the `spots` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SpotsArgs {
    /// Only list spots in this region.
    #[arg(long = ARG_REGION, value_name = "name")]
    pub(crate) region: Option<String>,
    /// Only list spots in this country.
    #[arg(long = ARG_COUNTRY, value_name = "name")]
    pub(crate) country: Option<String>,
}

pub(crate) fn select_spots(args: &SpotsArgs) -> Vec<&'static Spot> {
    match (args.region.as_deref(), args.country.as_deref()) {
        (Some(region), Some(country)) => spots_by_region(region)
            .into_iter()
            .filter(|spot| spot.country == country)
            .collect(),
        (Some(region), None) => spots_by_region(region),
        (None, Some(country)) => spots_by_country(country),
        (None, None) => all_spots().iter().collect(),
    }
}

pub(crate) fn run_spots_with(args: &SpotsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    emit(&select_spots(args), None, writer)
}
