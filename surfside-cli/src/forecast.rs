//! `forecast` command: rate one spot from saved Open-Meteo responses.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfside_core::{AbilityTier, Scorer, Spot};
use surfside_data::{ConditionsRecord, OpenMeteoPayload, spot_by_id};
use surfside_scorer::SurfScorer;

use crate::{
    ARG_ABILITY, ARG_FORECAST, ARG_HOUR, ARG_MARINE, ARG_OUTPUT, ARG_SPOT, CliError,
    ENV_FORECAST_FORECAST, ENV_FORECAST_MARINE, ENV_FORECAST_SPOT, emit, read_source,
    require_existing,
};

/// CLI arguments for the `forecast` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "forecast",
    long_about = "Score one catalogued spot from saved Open-Meteo marine and \
                 forecast responses. The hour counts from the start of the \
                 hourly series.",
    about = "Score one spot from saved Open-Meteo responses"
)]
#[ortho_config(prefix = "SURFSIDE")]
pub(crate) struct ForecastArgs {
    /// Identifier of the catalogued spot.
    #[arg(long = ARG_SPOT, value_name = "id")]
    #[serde(default)]
    pub(crate) spot: Option<String>,
    /// Path to the saved marine response.
    #[arg(long = ARG_MARINE, value_name = "path")]
    #[serde(default)]
    pub(crate) marine: Option<Utf8PathBuf>,
    /// Path to the saved wind forecast response.
    #[arg(long = ARG_FORECAST, value_name = "path")]
    #[serde(default)]
    pub(crate) forecast: Option<Utf8PathBuf>,
    /// Hour index into the series; defaults to the first hour.
    #[arg(long = ARG_HOUR, value_name = "index")]
    #[serde(default)]
    pub(crate) hour: Option<usize>,
    /// Surfer ability: beginner, intermediate, or advanced.
    #[arg(long = ARG_ABILITY, value_name = "label")]
    #[serde(default)]
    pub(crate) ability: Option<String>,
    /// Write JSON to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ForecastArgs {
    pub(crate) fn into_config(self) -> Result<ForecastConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ForecastConfig::try_from(merged)
    }
}

/// Resolved `forecast` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ForecastConfig {
    pub(crate) spot: &'static Spot,
    pub(crate) marine: Utf8PathBuf,
    pub(crate) forecast: Utf8PathBuf,
    pub(crate) hour: usize,
    pub(crate) ability: AbilityTier,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ForecastConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.marine, ARG_MARINE)?;
        require_existing(&self.forecast, ARG_FORECAST)?;
        Ok(())
    }
}

impl TryFrom<ForecastArgs> for ForecastConfig {
    type Error = CliError;

    fn try_from(args: ForecastArgs) -> Result<Self, Self::Error> {
        let id = args.spot.ok_or(CliError::MissingArgument {
            field: ARG_SPOT,
            env: ENV_FORECAST_SPOT,
        })?;
        let spot = spot_by_id(&id).ok_or(CliError::UnknownSpot { id })?;
        let marine = args.marine.ok_or(CliError::MissingArgument {
            field: ARG_MARINE,
            env: ENV_FORECAST_MARINE,
        })?;
        let forecast = args.forecast.ok_or(CliError::MissingArgument {
            field: ARG_FORECAST,
            env: ENV_FORECAST_FORECAST,
        })?;
        Ok(Self {
            spot,
            marine,
            forecast,
            hour: args.hour.unwrap_or_default(),
            ability: AbilityTier::resolve(args.ability.as_deref()),
            output: args.output,
        })
    }
}

pub(crate) fn run_forecast_with(
    args: ForecastArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let record = execute_forecast(&config)?;
    emit(&record, config.output.as_deref(), writer)
}

pub(crate) fn execute_forecast(config: &ForecastConfig) -> Result<ConditionsRecord, CliError> {
    let marine = read_source(&config.marine, ARG_MARINE)?;
    let forecast = read_source(&config.forecast, ARG_FORECAST)?;
    let payload = OpenMeteoPayload::from_json(&marine, &forecast).map_err(|source| {
        CliError::DecodeForecast {
            marine: config.marine.clone(),
            forecast: config.forecast.clone(),
            source,
        }
    })?;
    let hours = payload.hours();
    if config.hour >= hours {
        return Err(CliError::HourOutOfRange {
            hour: config.hour,
            hours,
        });
    }
    let observation = payload.observation_at(config.hour);
    let result = SurfScorer::default().score(&observation, &config.spot.profile(), config.ability);
    Ok(ConditionsRecord::new(config.spot, &observation, result))
}
