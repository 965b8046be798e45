//! Golden fixture tests for the evaluator.
//!
//! Each fixture directory at the workspace root (`tests/fixtures/<name>/`)
//! contains:
//!
//! - `profile.json` - The input profile
//! - `expected_matches.json` - The scheme ids expected to match, in order
//!
//! Re-bless with `SAHAYAK_BLESS=1` (or `cargo xtask bless-fixtures`).

use pretty_assertions::assert_eq;
use sahayak_catalog::Catalog;
use sahayak_engine::evaluate;
use sahayak_types::profile::Profile;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_dir(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().expect("workspace root");
    workspace_root.join("tests").join("fixtures").join(name)
}

fn run_fixture(name: &str) {
    let dir = fixture_dir(name);
    assert!(dir.exists(), "fixture does not exist: {}", dir.display());

    let profile_json = fs::read_to_string(dir.join("profile.json")).expect("read profile.json");
    let profile: Profile = serde_json::from_str(&profile_json).expect("parse profile.json");

    let catalog = Catalog::builtin();
    let matched: Vec<String> = evaluate(&profile, catalog.schemes())
        .iter()
        .map(|s| s.id.clone())
        .collect();

    let expected_path = dir.join("expected_matches.json");
    if std::env::var("SAHAYAK_BLESS").is_ok() {
        let blessed = serde_json::to_string_pretty(&matched).expect("serialize matches");
        fs::write(&expected_path, blessed + "\n").expect("bless expected_matches.json");
        return;
    }

    let expected_json =
        fs::read_to_string(&expected_path).expect("read expected_matches.json (bless first?)");
    let expected: Vec<String> =
        serde_json::from_str(&expected_json).expect("parse expected_matches.json");

    assert_eq!(matched, expected, "fixture {name}");
}

#[test]
fn fixture_woman_tailor() {
    run_fixture("woman_tailor");
}

#[test]
fn fixture_scanned_farmer() {
    run_fixture("scanned_farmer");
}

#[test]
fn fixture_empty_profile() {
    run_fixture("empty_profile");
}

#[test]
fn fixture_destitute_widow() {
    run_fixture("destitute_widow");
}

#[test]
fn fixture_senior_citizen() {
    run_fixture("senior_citizen");
}
