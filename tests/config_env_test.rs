//! ORGCHART_* environment overrides.
//!
//! Kept in its own test binary: it mutates process environment.

use std::fs;

use tempfile::TempDir;

use orgchart::application::ApplicationError;
use orgchart::config::{OutputFormat, Settings, MAX_SEED};
use orgchart::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_env_vars_when_load_then_override_file_and_reject_malformed_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgchart.toml");
    fs::write(&path, "node_budget = 250\nmax_level = 4\n").unwrap();

    std::env::set_var("ORGCHART_NODE_BUDGET", "75");
    std::env::set_var("ORGCHART_FORMAT", "json");
    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.node_budget, 75);
    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.max_level, 4);

    std::env::set_var("ORGCHART_NODE_BUDGET", "many");
    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));

    std::env::remove_var("ORGCHART_NODE_BUDGET");
    std::env::remove_var("ORGCHART_FORMAT");

    // large seeds keep every digit
    std::env::set_var("ORGCHART_SEED", "9223372036854775807");
    let settings = Settings::load(Some(&path)).expect("load max seed");
    assert_eq!(settings.seed, Some(MAX_SEED));
    assert!(settings.to_toml().is_ok());

    std::env::set_var("ORGCHART_SEED", "9223372036854775809");
    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));

    std::env::remove_var("ORGCHART_SEED");
}
