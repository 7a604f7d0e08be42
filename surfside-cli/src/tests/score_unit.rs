//! Focused unit tests covering score CLI configuration and output.

use super::helpers::{READINGS_JSON, Workspace};
use super::*;
use crate::score::{ScoreArgs, ScoreConfig, config_from_layers_for_test, execute_score};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use surfside_core::AbilityTier;
use surfside_data::{ConditionsRecord, Rating, all_spots};
use surfside_scorer::{ScoreWeightsError, SurfScorer};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config(observations: Utf8PathBuf, spot: Option<&str>) -> ScoreConfig {
    ScoreConfig {
        observations,
        ability: AbilityTier::Intermediate,
        spot: spot.map(str::to_owned),
        output: None,
        scorer: SurfScorer::default(),
    }
}

#[rstest]
fn converting_score_without_observations_errors() {
    let err = ScoreConfig::try_from(ScoreArgs::default()).expect_err("missing observations");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_OBSERVATIONS);
            assert_eq!(env, ENV_SCORE_OBSERVATIONS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, AbilityTier::Intermediate)]
#[case(Some("beginner"), AbilityTier::Beginner)]
#[case(Some(" Advanced "), AbilityTier::Advanced)]
#[case(Some("pro"), AbilityTier::Intermediate)]
fn ability_labels_resolve_with_fallback(
    #[case] label: Option<&str>,
    #[case] expected: AbilityTier,
) {
    let args = ScoreArgs {
        observations: Some(Utf8PathBuf::from("readings.json")),
        ability: label.map(str::to_owned),
        ..ScoreArgs::default()
    };

    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(config.ability, expected);
}

#[rstest]
fn invalid_weights_are_rejected() {
    let args = ScoreArgs {
        observations: Some(Utf8PathBuf::from("readings.json")),
        wind_weight: Some(-0.5),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("negative weight");
    match err {
        CliError::InvalidWeights(ScoreWeightsError::Negative { factor }) => {
            assert_eq!(factor, "wind");
        }
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_file(workspace: Workspace) {
    let err = config(workspace.path("absent.json"), None)
        .validate_sources()
        .expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_OBSERVATIONS),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let path = workspace.path("readings");
    std::fs::create_dir(&path).expect("readings directory");

    let err = config(path, None).validate_sources().expect_err("directory");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_OBSERVATIONS),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn scores_every_spot_with_fallback(workspace: Workspace) {
    let path = workspace.write("readings.json", READINGS_JSON);
    let mut buffer = Vec::new();

    execute_score(&config(path, None), &mut buffer).expect("score should succeed");

    let records: Vec<ConditionsRecord> =
        serde_json::from_slice(&buffer).expect("output should be JSON records");
    assert_eq!(records.len(), all_spots().len());
    let strandhill = records
        .iter()
        .find(|record| record.spot_id == "strandhill")
        .expect("strandhill record");
    let easkey = records
        .iter()
        .find(|record| record.spot_id == "easkey")
        .expect("easkey record");
    assert_eq!(strandhill.rating, Rating::Excellent);
    assert!(easkey.score < strandhill.score);
}

#[rstest]
fn scores_a_single_spot_as_one_record(workspace: Workspace) {
    let path = workspace.write("readings.json", READINGS_JSON);
    let mut buffer = Vec::new();

    execute_score(&config(path, Some("strandhill")), &mut buffer).expect("score should succeed");

    let record: ConditionsRecord =
        serde_json::from_slice(&buffer).expect("output should be one record");
    assert_eq!(record.spot_name, "Strandhill");
    assert!(
        record
            .reasons
            .iter()
            .any(|reason| reason.starts_with("Offshore wind"))
    );
}

#[rstest]
fn unknown_spots_are_reported(workspace: Workspace) {
    let path = workspace.write("readings.json", READINGS_JSON);
    let mut buffer = Vec::new();

    let err = execute_score(&config(path, Some("pipeline")), &mut buffer).expect_err("unknown");
    match err {
        CliError::UnknownSpot { id } => assert_eq!(id, "pipeline"),
        other => panic!("expected UnknownSpot, found {other:?}"),
    }
}

#[rstest]
fn malformed_readings_are_reported(workspace: Workspace) {
    let path = workspace.write("readings.json", "{ not json");
    let mut buffer = Vec::new();

    let err = execute_score(&config(path.clone(), None), &mut buffer).expect_err("malformed");
    match err {
        CliError::Decode { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Decode, found {other:?}"),
    }
}

#[rstest]
fn writes_output_file_when_configured(workspace: Workspace) {
    let path = workspace.write("readings.json", READINGS_JSON);
    let output = workspace.path("reports/strandhill.json");
    let mut buffer = Vec::new();
    let config = ScoreConfig {
        output: Some(output.clone()),
        ..config(path, Some("strandhill"))
    };

    execute_score(&config, &mut buffer).expect("score should succeed");

    assert!(buffer.is_empty());
    let written = std::fs::read_to_string(&output).expect("output file");
    let record: ConditionsRecord = serde_json::from_str(&written).expect("record json");
    assert_eq!(record.spot_id, "strandhill");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "observations": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let env_observations = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "observations": workspace.path("from-file.json").as_str(),
            "ability": "beginner",
            "wind_weight": 0.5,
        }),
        None,
    );
    composer.push_environment(json!({
        "observations": env_observations.as_str(),
    }));
    composer.push_cli(json!({ "ability": "advanced" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.observations, env_observations);
    assert_eq!(config.ability, AbilityTier::Advanced);
    assert!((config.scorer.weights().wind - 0.5).abs() < 1e-6);
}
