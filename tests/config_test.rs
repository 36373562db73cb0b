//! Integration tests for Settings config loading.
//!
//! These tests run without a global config and without ORGCHART_* variables
//! (the env override test lives in its own binary).

use std::fs;

use tempfile::TempDir;

use orgchart::application::ApplicationError;
use orgchart::config::{OutputFormat, Settings};
use orgchart::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_no_config_when_load_then_uses_defaults() {
    let settings = Settings::load(None).expect("load defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_when_load_then_overrides_specified_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgchart.toml");
    fs::write(
        &path,
        r#"
node_budget = 250
seed = 99
format = "stats"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.node_budget, 250);
    assert_eq!(settings.seed, Some(99));
    assert_eq!(settings.format, OutputFormat::Stats);
    // unspecified fields keep defaults
    assert_eq!(settings.max_level, 8);
    assert_eq!(settings.tree_depth, 3);
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "node_budget = \"lots\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_template_when_written_and_loaded_then_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgchart.toml");
    fs::write(&path, Settings::template()).unwrap();

    let settings = Settings::load(Some(&path)).expect("load template");

    assert_eq!(settings, Settings::default());
}
