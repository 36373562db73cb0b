//! Chart generation service
//!
//! Builds generators from settings, renders charts, and writes them out.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::{OutputFormat, Settings};
use crate::domain::{ChartStats, DomainError, GeneratorParams, OrgNode, OrgTreeGenerator};
use crate::infrastructure::traits::FileSystem;

/// Service for generating and rendering organizational charts.
pub struct ChartService {
    settings: Arc<Settings>,
    fs: Arc<dyn FileSystem>,
}

impl ChartService {
    /// Create a new chart service.
    pub fn new(settings: Arc<Settings>, fs: Arc<dyn FileSystem>) -> Self {
        Self { settings, fs }
    }

    /// Validated generator parameters from settings.
    pub fn params(&self) -> ApplicationResult<GeneratorParams> {
        let params = self.settings.generator_params();
        params.validate()?;
        Ok(params)
    }

    /// Generator for the `index`-th chart of a run.
    ///
    /// Seeded settings give chart `i` the seed `seed + i`.
    fn generator(&self, params: GeneratorParams, index: u64) -> OrgTreeGenerator {
        match self.settings.seed {
            Some(seed) => OrgTreeGenerator::with_seed(params, seed.wrapping_add(index)),
            None => OrgTreeGenerator::new(params),
        }
    }

    /// Generate one chart.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&self) -> ApplicationResult<OrgNode> {
        let params = self.params()?;
        let root = self
            .generator(params, 0)
            .generate()
            .ok_or_else(|| DomainError::InvalidParams {
                message: "node budget produced no root".to_string(),
            })?;
        info!("generated chart with {} nodes", root.node_count());
        Ok(root)
    }

    /// Generate `count` charts in parallel, each on its own generator.
    #[instrument(level = "debug", skip(self))]
    pub fn generate_batch(&self, count: usize) -> ApplicationResult<Vec<OrgNode>> {
        let params = self.params()?;
        (0..count as u64)
            .into_par_iter()
            .map(|index| {
                self.generator(params, index)
                    .generate()
                    .ok_or_else(|| {
                        ApplicationError::from(DomainError::InvalidParams {
                            message: "node budget produced no root".to_string(),
                        })
                    })
            })
            .collect()
    }

    /// Render a chart in the given format.
    pub fn render(&self, root: &OrgNode, format: OutputFormat) -> ApplicationResult<String> {
        match format {
            OutputFormat::Tree => Ok(self.render_tree(root).to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(root)?),
            OutputFormat::Stats => Ok(ChartStats::collect(root).to_string()),
        }
    }

    /// ASCII tree limited to `tree_depth` levels below the root.
    pub fn render_tree(&self, root: &OrgNode) -> Tree<String> {
        to_tree(root, self.settings.tree_depth)
    }

    /// Write a rendered chart to `path`, creating parent directories.
    #[instrument(level = "debug", skip(self, root))]
    pub fn export(&self, root: &OrgNode, format: OutputFormat, path: &Path) -> ApplicationResult<()> {
        let rendered = self.render(root, format)?;
        self.fs
            .ensure_parent(path)
            .with_path_context("create parent of", path)?;
        self.fs
            .write(path, &rendered)
            .with_path_context("write chart", path)?;
        debug!("wrote {} bytes to {}", rendered.len(), path.display());
        Ok(())
    }
}

fn node_label(node: &OrgNode) -> String {
    format!(
        "{} - {} [{}] (L{})",
        node.name, node.position, node.department, node.level
    )
}

fn to_tree(node: &OrgNode, depth: usize) -> Tree<String> {
    if depth == 0 && !node.children.is_empty() {
        let hidden = node.node_count() - 1;
        return Tree::new(format!("{} +{} more", node_label(node), hidden));
    }
    let leaves: Vec<_> = node
        .children
        .iter()
        .map(|c| to_tree(c, depth.saturating_sub(1)))
        .collect();
    Tree::new(node_label(node)).with_leaves(leaves)
}
