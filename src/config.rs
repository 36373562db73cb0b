//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgchart/orgchart.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ORGCHART_*` prefix
//!
//! CLI flags are applied on top by the command layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::generator::{DEFAULT_MAX_LEVEL, DEFAULT_NODE_BUDGET};
use crate::domain::GeneratorParams;

/// Largest accepted seed; TOML integers are signed 64-bit.
pub const MAX_SEED: u64 = i64::MAX as u64;

/// How a generated chart is rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented ASCII tree
    #[default]
    Tree,
    /// Nested JSON document
    Json,
    /// Summary statistics
    Stats,
}

/// Unified configuration for orgchart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of nodes per chart
    pub node_budget: usize,
    /// Deepest level generated (root = 0)
    pub max_level: usize,
    /// Fixed RNG seed for reproducible charts
    pub seed: Option<u64>,
    /// Default output format
    pub format: OutputFormat,
    /// Levels shown by the tree renderer
    pub tree_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node_budget: DEFAULT_NODE_BUDGET,
            max_level: DEFAULT_MAX_LEVEL,
            seed: None,
            format: OutputFormat::Tree,
            tree_depth: 3,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub node_budget: Option<usize>,
    pub max_level: Option<usize>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub tree_depth: Option<usize>,
}

/// Get the XDG config directory for orgchart.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgchart").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgchart.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            node_budget: overlay.node_budget.unwrap_or(self.node_budget),
            max_level: overlay.max_level.unwrap_or(self.max_level),
            seed: overlay.seed.or(self.seed),
            format: overlay.format.unwrap_or(self.format),
            tree_depth: overlay.tree_depth.unwrap_or(self.tree_depth),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        if let Some(seed) = current.seed {
            check_seed(seed)?;
        }
        Self::apply_env_overrides(current)
    }

    /// Apply ORGCHART_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // values stay strings so large integers parse exactly
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ORGCHART")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<usize>(&config, "node_budget")? {
            settings.node_budget = val;
        }
        if let Some(val) = env_value::<usize>(&config, "max_level")? {
            settings.max_level = val;
        }
        if let Some(val) = env_value::<u64>(&config, "seed")? {
            settings.seed = Some(check_seed(val)?);
        }
        if let Some(val) = env_value::<OutputFormat>(&config, "format")? {
            settings.format = val;
        }
        if let Some(val) = env_value::<usize>(&config, "tree_depth")? {
            settings.tree_depth = val;
        }

        Ok(settings)
    }

    /// Generator parameters described by these settings.
    pub fn generator_params(&self) -> GeneratorParams {
        GeneratorParams {
            node_budget: self.node_budget,
            max_level: self.max_level,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# orgchart configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/orgchart/orgchart.toml
#   File:   orgchart --config <path>
#   Env:    ORGCHART_* environment variables (e.g. ORGCHART_NODE_BUDGET=500)

# Maximum number of nodes per chart
# node_budget = 10000

# Deepest level generated (root = 0)
# max_level = 8

# Fixed seed for reproducible charts (0 to 9223372036854775807)
# seed = 42

# Output format: "tree", "json" or "stats"
# format = "tree"

# Levels shown by the tree renderer
# tree_depth = 3
"#
        .to_string()
    }
}

/// Read one key; absent keys are `None`, malformed values are errors.
fn env_value<T: serde::de::DeserializeOwned>(
    config: &Config,
    key: &str,
) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn check_seed(seed: u64) -> Result<u64, ApplicationError> {
    if seed > MAX_SEED {
        return Err(ApplicationError::Config {
            message: format!("seed {seed} exceeds maximum {MAX_SEED}"),
        });
    }
    Ok(seed)
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_match_generator_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.generator_params(), GeneratorParams::default());
        assert_eq!(settings.seed, None);
        assert_eq!(settings.format, OutputFormat::Tree);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            node_budget: Some(50),
            seed: Some(7),
            ..Default::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.node_budget, 50);
        assert_eq!(merged.seed, Some(7));
        assert_eq!(merged.max_level, base.max_level);
        assert_eq!(merged.tree_depth, base.tree_depth);
    }

    #[test]
    fn given_settings_when_serialized_then_roundtrips_through_toml() {
        let settings = Settings {
            seed: Some(3),
            format: OutputFormat::Json,
            ..Default::default()
        };
        let text = settings.to_toml().expect("serialize");
        assert!(text.contains("format = \"json\""));
        let parsed: Settings = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_max_seed_when_serialized_then_roundtrips_exactly() {
        let settings = Settings {
            seed: Some(MAX_SEED),
            ..Default::default()
        };
        let text = settings.to_toml().expect("serialize");
        let parsed: Settings = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.seed, Some(MAX_SEED));
    }

    #[test]
    fn given_seed_above_max_when_checked_then_config_error() {
        assert_eq!(check_seed(MAX_SEED).unwrap(), MAX_SEED);
        let err = check_seed(MAX_SEED + 1).unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("parse template");
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }
}
