//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::{OutputFormat, Settings, MAX_SEED};

/// Synthetic organizational chart generator for grid UI stress-testing
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one chart
    Generate {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Levels shown by the tree format
        #[arg(long)]
        tree_depth: Option<usize>,

        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Generate several charts in parallel and summarize them
    Batch {
        /// Number of charts
        #[arg(short = 'n', long, default_value_t = 4)]
        count: usize,

        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Overrides for the chart shape.
#[derive(Args, Debug, Clone, Default)]
pub struct ShapeArgs {
    /// RNG seed for reproducible output
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(..=MAX_SEED))]
    pub seed: Option<u64>,

    /// Maximum number of nodes per chart
    #[arg(short, long)]
    pub budget: Option<usize>,

    /// Deepest level generated (root = 0)
    #[arg(short = 'l', long)]
    pub max_level: Option<usize>,
}

impl ShapeArgs {
    /// Apply flags on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(budget) = self.budget {
            settings.node_budget = budget;
        }
        if let Some(max_level) = self.max_level {
            settings.max_level = max_level;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_generate_flags_when_parsing_then_populates_shape() {
        let cli = Cli::try_parse_from([
            "orgchart", "-dd", "generate", "--seed", "5", "-b", "100", "-l", "3", "-f", "json",
        ])
        .unwrap();

        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Generate { shape, format, .. }) => {
                assert_eq!(shape.seed, Some(5));
                assert_eq!(shape.budget, Some(100));
                assert_eq!(shape.max_level, Some(3));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn given_seed_above_max_when_parsing_then_rejected() {
        let max = MAX_SEED.to_string();
        let cli = Cli::try_parse_from(["orgchart", "generate", "--seed", max.as_str()]).unwrap();
        match cli.command {
            Some(Commands::Generate { shape, .. }) => assert_eq!(shape.seed, Some(MAX_SEED)),
            other => panic!("unexpected command: {:?}", other),
        }

        let too_big = (MAX_SEED + 1).to_string();
        let result = Cli::try_parse_from(["orgchart", "batch", "--seed", too_big.as_str()]);
        assert!(result.is_err());
    }

    #[test]
    fn given_shape_args_when_applying_then_overrides_only_given_fields() {
        let mut settings = Settings::default();
        let shape = ShapeArgs {
            budget: Some(12),
            ..Default::default()
        };

        shape.apply(&mut settings);

        assert_eq!(settings.node_budget, 12);
        assert_eq!(settings.max_level, Settings::default().max_level);
        assert_eq!(settings.seed, None);
    }
}
