//! `score` command: rate catalogued spots from a file of readings.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfside_core::{AbilityTier, Spot};
use surfside_data::{FallbackSource, StaticObservationSource, all_spots, assess_spots, spot_by_id};
use surfside_scorer::{ScoreWeights, SurfScorer};

use crate::{
    ARG_ABILITY, ARG_OBSERVATIONS, ARG_OUTPUT, ARG_SPOT, ARG_SWELL_WEIGHT, ARG_WAVE_WEIGHT,
    ARG_WIND_WEIGHT, CliError, ENV_SCORE_OBSERVATIONS, emit, read_source, require_existing,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score catalogued spots from a JSON object mapping spot ids \
                 to readings. Spots without readings are scored against \
                 fallback conditions. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Score catalogued spots from a file of readings"
)]
#[ortho_config(prefix = "SURFSIDE")]
pub(crate) struct ScoreArgs {
    /// Path to the JSON readings file.
    #[arg(long = ARG_OBSERVATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) observations: Option<Utf8PathBuf>,
    /// Surfer ability: beginner, intermediate, or advanced.
    #[arg(long = ARG_ABILITY, value_name = "label")]
    #[serde(default)]
    pub(crate) ability: Option<String>,
    /// Score only this spot and print a single record.
    #[arg(long = ARG_SPOT, value_name = "id")]
    #[serde(default)]
    pub(crate) spot: Option<String>,
    /// Write JSON to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Relative weight of swell quality.
    #[arg(long = ARG_SWELL_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) swell_weight: Option<f32>,
    /// Relative weight of wind quality.
    #[arg(long = ARG_WIND_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) wind_weight: Option<f32>,
    /// Relative weight of wave-height consistency.
    #[arg(long = ARG_WAVE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) wave_weight: Option<f32>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) observations: Utf8PathBuf,
    pub(crate) ability: AbilityTier,
    pub(crate) spot: Option<String>,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) scorer: SurfScorer,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.observations, ARG_OBSERVATIONS)
    }

    fn spots(&self) -> Result<Vec<&'static Spot>, CliError> {
        match self.spot.as_deref() {
            Some(id) => spot_by_id(id)
                .map(|spot| vec![spot])
                .ok_or_else(|| CliError::UnknownSpot { id: id.to_owned() }),
            None => Ok(all_spots().iter().collect()),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let observations = args.observations.ok_or(CliError::MissingArgument {
            field: ARG_OBSERVATIONS,
            env: ENV_SCORE_OBSERVATIONS,
        })?;
        let defaults = ScoreWeights::default();
        let scorer = SurfScorer::new(ScoreWeights {
            swell: args.swell_weight.unwrap_or(defaults.swell),
            wind: args.wind_weight.unwrap_or(defaults.wind),
            wave_height: args.wave_weight.unwrap_or(defaults.wave_height),
        })?;
        Ok(Self {
            observations,
            ability: AbilityTier::resolve(args.ability.as_deref()),
            spot: args.spot,
            output: args.output,
            scorer,
        })
    }
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_score(&config, writer)
}

pub(crate) fn execute_score(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let source = FallbackSource::new(load_observations(&config.observations)?);
    let spots = config.spots()?;
    let records = assess_spots(
        &source,
        spots.iter().copied(),
        config.ability,
        &config.scorer,
    )?;
    let output = config.output.as_deref();
    match (config.spot.is_some(), records.as_slice()) {
        (true, [record]) => emit(record, output, writer),
        _ => emit(&records, output, writer),
    }
}

/// Load the readings file into a static observation source.
pub(crate) fn load_observations(path: &Utf8Path) -> Result<StaticObservationSource, CliError> {
    let contents = read_source(path, ARG_OBSERVATIONS)?;
    StaticObservationSource::from_json(&contents).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
