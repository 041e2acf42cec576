//! Focused unit tests covering rank configuration and input loading.

use super::helpers::{Workspace, write_json_file, write_utf8};
use crate::io::{load_catalog, load_criteria};
use crate::rank::{RankArgs, RankConfig, config_from_layers_for_test, execute_rank, run_rank_with};
use super::*;
use giftmatch_core::CriteriaError;
use giftmatch_scorer::{LEGACY_LIMIT, RankOptions, ScorerError, ScoringProfile};
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

fn args_for(workspace: &Workspace) -> RankArgs {
    RankArgs {
        criteria_path: Some(workspace.criteria_path()),
        catalog: Some(workspace.catalog_path()),
        ..RankArgs::default()
    }
}

#[rstest]
fn converting_rank_without_criteria_errors() {
    let args = RankArgs {
        catalog: Some("catalog.json".into()),
        ..RankArgs::default()
    };

    let err = RankConfig::try_from(args).expect_err("missing criteria should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CRITERIA);
            assert_eq!(env, ENV_CRITERIA);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_rank_without_catalog_errors() {
    let args = RankArgs {
        criteria_path: Some("criteria.json".into()),
        ..RankArgs::default()
    };

    let err = RankConfig::try_from(args).expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::default(None, ScoringProfile::Canonical)]
#[case::canonical(Some("canonical"), ScoringProfile::Canonical)]
#[case::legacy(Some("Legacy"), ScoringProfile::Legacy)]
fn converting_rank_resolves_profile(
    #[case] profile: Option<&str>,
    #[case] expected: ScoringProfile,
) {
    let workspace = Workspace::new();
    let args = RankArgs {
        profile: profile.map(str::to_owned),
        ..args_for(&workspace)
    };

    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.profile, expected);
}

#[rstest]
fn converting_rank_rejects_unknown_profile() {
    let workspace = Workspace::new();
    let args = RankArgs {
        profile: Some("fancy".to_owned()),
        ..args_for(&workspace)
    };

    let err = RankConfig::try_from(args).expect_err("unknown profile should error");
    match err {
        CliError::Profile(ScorerError::UnknownProfile(name)) => assert_eq!(name, "fancy"),
        other => panic!("expected Profile, found {other:?}"),
    }
}

#[rstest]
#[case::negative(-0.1)]
#[case::above_one(1.5)]
#[case::nan(f64::NAN)]
fn converting_rank_rejects_out_of_range_min_score(#[case] value: f64) {
    let workspace = Workspace::new();
    let args = RankArgs {
        min_score: Some(value),
        ..args_for(&workspace)
    };

    let err = RankConfig::try_from(args).expect_err("min score should be rejected");
    assert!(matches!(err, CliError::InvalidMinScore { .. }));
}

#[rstest]
fn ranker_applies_overrides_on_top_of_profile() {
    let workspace = Workspace::new();
    let args = RankArgs {
        profile: Some("legacy".to_owned()),
        limit: Some(2),
        ..args_for(&workspace)
    };

    let config = RankConfig::try_from(args).expect("config should build");
    let ranker = config.ranker().expect("ranker should build");
    assert_eq!(ranker.options(), RankOptions::LEGACY.with_limit(2));
    assert_ne!(ranker.options().limit, LEGACY_LIMIT);
}

#[rstest]
fn load_catalog_skips_entries_that_are_not_objects() {
    let workspace = Workspace::new();
    workspace.write_sample_catalog();

    let catalog = load_catalog(&workspace.catalog_path()).expect("catalog should load");
    let ids: Vec<u64> = catalog.iter().map(|item| item.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[rstest]
fn load_catalog_rejects_non_array_payload() {
    let workspace = Workspace::new();
    write_json_file(&workspace.catalog_path(), &json!({ "id": 1 }));

    let err = load_catalog(&workspace.catalog_path()).expect_err("object should be rejected");
    match err {
        CliError::CatalogNotArray { path } => assert_eq!(path, workspace.catalog_path()),
        other => panic!("expected CatalogNotArray, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_reports_invalid_json() {
    let workspace = Workspace::new();
    write_utf8(&workspace.catalog_path(), b"[ not valid json");

    let err = load_catalog(&workspace.catalog_path()).expect_err("invalid json should error");
    match err {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, workspace.catalog_path());
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_criteria_reports_missing_file() {
    let workspace = Workspace::new();

    let err = load_criteria(&workspace.criteria_path()).expect_err("missing file should error");
    match err {
        CliError::OpenInput { field, path, .. } => {
            assert_eq!(field, ARG_CRITERIA);
            assert_eq!(path, workspace.criteria_path());
        }
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn execute_rank_requires_age_and_budget_by_default() {
    let workspace = Workspace::new();
    workspace.write_sample_catalog();
    write_json_file(&workspace.criteria_path(), &json!({ "budget": 50 }));
    let config = RankConfig::try_from(args_for(&workspace)).expect("config should build");

    let err = execute_rank(&config).expect_err("partial criteria should be rejected");
    match err {
        CliError::InvalidCriteria { source, .. } => {
            assert_eq!(source, CriteriaError::MissingRequired { field: "age" });
        }
        other => panic!("expected InvalidCriteria, found {other:?}"),
    }
}

#[rstest]
fn execute_rank_accepts_partial_criteria_when_allowed() {
    let workspace = Workspace::new();
    workspace.write_sample_catalog();
    write_json_file(&workspace.criteria_path(), &json!({ "interests": ["sports"] }));
    let args = RankArgs {
        allow_partial: true,
        ..args_for(&workspace)
    };
    let config = RankConfig::try_from(args).expect("config should build");

    let results = execute_rank(&config).expect("partial criteria should rank");
    assert_eq!(results.first().map(|result| result.item.id), Some(3));
}

#[rstest]
fn run_rank_writes_results_as_json() {
    let workspace = Workspace::new();
    workspace.write_sample_catalog();
    workspace.write_gamer_criteria();
    let mut buffer = Vec::new();

    run_rank_with(args_for(&workspace), &mut buffer).expect("rank should succeed");

    let output: Value = serde_json::from_slice(&buffer).expect("output should be JSON");
    let results = output.as_array().expect("output should be an array");
    assert_eq!(results.len(), 3);
    let best = results.first().expect("at least one result");
    assert_eq!(best.pointer("/item/id"), Some(&json!(1)));
    assert_eq!(best.pointer("/item/name_en"), Some(&json!("Gaming Platform Gift Card")));
    assert_eq!(best.get("score"), Some(&json!(1.0)));
    assert_eq!(best.pointer("/matchDetails/totalScore"), Some(&json!(100.0)));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "criteria_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let workspace = Workspace::new();
    let env_criteria = workspace.path("from-env-criteria.json");
    let cli_catalog = workspace.path("from-cli-catalog.json");

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": workspace.path("from-file-catalog.json").as_str(),
            "profile": "legacy",
            "limit": 10,
        }),
        None,
    );
    composer.push_environment(json!({
        "criteria_path": env_criteria.as_str(),
        "limit": 7,
    }));
    composer.push_cli(json!({
        "catalog": cli_catalog.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.criteria_path, env_criteria);
    assert_eq!(config.catalog_path, cli_catalog);
    assert_eq!(config.profile, ScoringProfile::Legacy);
    assert_eq!(config.limit, Some(7));
    assert!(!config.allow_partial);
}
