//! Command-line interface for scoring Surfside spots.
//!
//! Three subcommands are available:
//! - `score` rates catalogued spots from a JSON file of readings keyed by
//!   spot id, substituting fallback conditions for spots without readings.
//! - `forecast` rates one spot from saved Open-Meteo marine and forecast
//!   responses.
//! - `spots` lists the catalogue.
//!
//! Options layer CLI flags over `SURFSIDE_*` environment variables and
//! configuration files via `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod forecast;
mod score;
mod spots;

pub use error::CliError;

use forecast::{ForecastArgs, run_forecast_with};
use score::{ScoreArgs, run_score_with};
use spots::{SpotsArgs, run_spots_with};

pub(crate) const ARG_OBSERVATIONS: &str = "observations";
pub(crate) const ARG_ABILITY: &str = "ability";
pub(crate) const ARG_SPOT: &str = "spot";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_MARINE: &str = "marine";
pub(crate) const ARG_FORECAST: &str = "forecast";
pub(crate) const ARG_HOUR: &str = "hour";
pub(crate) const ARG_SWELL_WEIGHT: &str = "swell-weight";
pub(crate) const ARG_WIND_WEIGHT: &str = "wind-weight";
pub(crate) const ARG_WAVE_WEIGHT: &str = "wave-weight";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_COUNTRY: &str = "country";
pub(crate) const ENV_SCORE_OBSERVATIONS: &str = "SURFSIDE_CMDS_SCORE_OBSERVATIONS";
pub(crate) const ENV_FORECAST_SPOT: &str = "SURFSIDE_CMDS_FORECAST_SPOT";
pub(crate) const ENV_FORECAST_MARINE: &str = "SURFSIDE_CMDS_FORECAST_MARINE";
pub(crate) const ENV_FORECAST_FORECAST: &str = "SURFSIDE_CMDS_FORECAST_FORECAST";

/// Run the Surfside CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input, or
/// output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, writer),
        Command::Forecast(args) => run_forecast_with(args, writer),
        Command::Spots(args) => run_spots_with(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "surfside",
    about = "Score surf conditions for catalogued spots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score catalogued spots from a file of readings.
    Score(ScoreArgs),
    /// Score one spot from saved Open-Meteo responses.
    Forecast(ForecastArgs),
    /// List catalogued spots.
    Spots(SpotsArgs),
}

/// Serialise `value` as pretty JSON to `output`, or to `writer` when no
/// output file is configured.
pub(crate) fn emit<T: Serialize + ?Sized>(
    value: &T,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    payload.push('\n');
    match output {
        Some(path) => {
            surfside_fs::write_utf8_file(path, &payload).map_err(|source| {
                CliError::WriteOutputFile {
                    path: path.to_path_buf(),
                    source,
                }
            })
        }
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match surfside_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::ReadSource {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read a validated input file.
pub(crate) fn read_source(path: &Utf8Path, field: &'static str) -> Result<String, CliError> {
    surfside_fs::read_utf8_file(path).map_err(|source| CliError::ReadSource {
        field,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
