//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, ShapeArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::domain::ChartStats;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Generate {
            shape,
            format,
            tree_depth,
            output: output_path,
        }) => _generate(settings, shape, *format, *tree_depth, output_path.as_deref()),
        Some(Commands::Batch { count, shape }) => _batch(settings, *count, shape),
        Some(Commands::Config { command }) => _config(settings, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Err(CliError::Usage(
            "no command given, try 'orgchart --help'".to_string(),
        )),
    }
}

#[instrument(skip(settings))]
fn _generate(
    mut settings: Settings,
    shape: &ShapeArgs,
    format: Option<OutputFormat>,
    tree_depth: Option<usize>,
    output_path: Option<&Path>,
) -> CliResult<()> {
    shape.apply(&mut settings);
    if let Some(depth) = tree_depth {
        settings.tree_depth = depth;
    }
    let format = format.unwrap_or(settings.format);

    let container = ServiceContainer::new(settings);
    let chart = container.chart();
    let root = chart.generate()?;

    match output_path {
        Some(path) => {
            chart.export(&root, format, path)?;
            output::success(&format!(
                "wrote {} nodes to {}",
                root.node_count(),
                path.display()
            ));
        }
        None => output::info(&chart.render(&root, format)?),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _batch(mut settings: Settings, count: usize, shape: &ShapeArgs) -> CliResult<()> {
    if count == 0 {
        return Err(CliError::InvalidArgs("count must be at least 1".to_string()));
    }
    shape.apply(&mut settings);

    let container = ServiceContainer::new(settings);
    let charts = container.chart().generate_batch(count)?;

    output::header(&format!("Generated {} charts", charts.len()));
    for (i, root) in charts.iter().enumerate() {
        let stats = ChartStats::collect(root);
        output::detail(&format!(
            "#{}: {} nodes, max level {}, {} leaves, {} managerial, headcount {}",
            i,
            stats.total_nodes,
            stats.max_level,
            stats.leaf_count,
            stats.managerial_count,
            stats.headcount.total
        ));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config(settings: Settings, command: &ConfigCommands) -> CliResult<()> {
    let container = ServiceContainer::new(settings);
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let marker = if path.exists() { "" } else { " (not found)" };
                    output::info(&format!("global: {}{}", path.display(), marker));
                }
                None => output::info("global: (no config directory)"),
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("cannot determine config directory".to_string())
            })?;
            init_config(&container, &path, *force)?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

/// Write the config template to `path`.
fn init_config(container: &ServiceContainer, path: &Path, force: bool) -> CliResult<()> {
    if container.fs.exists(path) && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    container
        .fs
        .ensure_parent(path)
        .map_err(|e| InfraError::io(format!("create parent of {}", path.display()), e))?;
    container
        .fs
        .write(path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::FileSystem;
    use crate::util::testing::MemoryFileSystem;
    use std::sync::Arc;

    #[test]
    fn given_missing_config_when_init_then_writes_template() {
        let fs = Arc::new(MemoryFileSystem::default());
        let container = ServiceContainer::with_deps(Settings::default(), fs.clone());
        let path = Path::new("/cfg/orgchart/orgchart.toml");

        init_config(&container, path, false).unwrap();

        assert_eq!(fs.read_to_string(path).unwrap(), Settings::template());
    }

    #[test]
    fn given_existing_config_when_init_without_force_then_usage_error() {
        let fs = Arc::new(MemoryFileSystem::default());
        let container = ServiceContainer::with_deps(Settings::default(), fs.clone());
        let path = Path::new("/cfg/orgchart.toml");
        init_config(&container, path, false).unwrap();

        let err = init_config(&container, path, false).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));

        init_config(&container, path, true).unwrap();
    }

    #[test]
    fn given_zero_count_when_batching_then_invalid_args() {
        let err = _batch(Settings::default(), 0, &ShapeArgs::default()).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
