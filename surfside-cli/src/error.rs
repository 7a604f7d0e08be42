//! Error types emitted by the Surfside CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use surfside_data::ObservationError;
use surfside_scorer::ScoreWeightsError;
use thiserror::Error;

/// Errors emitted by the Surfside CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long flag name of the option.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Long flag name of the option.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected or read.
    #[error("failed to read {field} path {path:?}: {source}")]
    ReadSource {
        /// Long flag name of the option.
        field: &'static str,
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A readings file could not be decoded.
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        /// File that failed to decode.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: ObservationError,
    },
    /// Saved Open-Meteo responses could not be decoded.
    #[error("failed to decode Open-Meteo responses {marine:?} and {forecast:?}: {source}")]
    DecodeForecast {
        /// Marine response file.
        marine: Utf8PathBuf,
        /// Wind forecast response file.
        forecast: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: ObservationError,
    },
    /// Observing a spot failed.
    #[error(transparent)]
    Observation(#[from] ObservationError),
    /// The requested spot is not in the catalogue.
    #[error("unknown spot '{id}'")]
    UnknownSpot {
        /// Requested identifier.
        id: String,
    },
    /// The requested forecast hour lies beyond the decoded series.
    #[error("hour {hour} is outside the forecast, which covers {hours} hours")]
    HourOutOfRange {
        /// Requested hour index.
        hour: usize,
        /// Hours available.
        hours: usize,
    },
    /// Configured score weights failed validation.
    #[error("invalid score weights: {0}")]
    InvalidWeights(#[from] ScoreWeightsError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the command output to a file failed.
    #[error("failed to write output to {path:?}: {source}")]
    WriteOutputFile {
        /// Destination file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
