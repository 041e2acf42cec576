//! Unit tests for the interests subcommand.

use super::helpers::Workspace;
use crate::interests::{InterestsArgs, collect_interests, run_interests_with};
use super::*;
use giftmatch_core::{KNOWN_INTERESTS, Tag};
use rstest::rstest;

#[rstest]
fn collect_interests_defaults_to_vocabulary() {
    let interests = collect_interests(&InterestsArgs::default()).expect("vocabulary");
    assert_eq!(interests.len(), KNOWN_INTERESTS.len());
    assert!(interests.contains(&Tag::parse("gaming").expect("tag")));
}

#[rstest]
fn collect_interests_reads_catalog_when_given() {
    let workspace = Workspace::new();
    workspace.write_sample_catalog();
    let args = InterestsArgs {
        catalog: Some(workspace.catalog_path()),
    };

    let interests = collect_interests(&args).expect("catalog interests");
    let names: Vec<&str> = interests.iter().map(Tag::as_str).collect();
    assert_eq!(
        names,
        [
            "beauty",
            "fashion",
            "fitness",
            "gaming",
            "running",
            "self-care",
            "sports",
            "technology",
        ]
    );
}

#[rstest]
fn collect_interests_reports_missing_catalog() {
    let workspace = Workspace::new();
    let args = InterestsArgs {
        catalog: Some(workspace.catalog_path()),
    };

    let err = collect_interests(&args).expect_err("missing catalog should error");
    match err {
        CliError::OpenInput { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn run_interests_writes_sorted_json_array() {
    let mut buffer = Vec::new();
    run_interests_with(InterestsArgs::default(), &mut buffer).expect("interests should print");

    let names: Vec<String> = serde_json::from_slice(&buffer).expect("output should be JSON");
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), KNOWN_INTERESTS.len());
}
