//! Random organizational chart generation
//!
//! Builds a bounded random tree of [`OrgNode`]s. Branching depends on the
//! level, and a per-run [`NodeBudget`] caps the total node count.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::domain::budget::NodeBudget;
use crate::domain::catalog;
use crate::domain::entities::{Headcount, OrgNode};
use crate::domain::error::DomainError;

pub const DEFAULT_NODE_BUDGET: usize = 10_000;
pub const DEFAULT_MAX_LEVEL: usize = 8;
/// Recursion guard for configurable depths.
pub const MAX_SUPPORTED_LEVEL: usize = 64;

/// Shape parameters for one generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    pub node_budget: usize,
    pub max_level: usize,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            node_budget: DEFAULT_NODE_BUDGET,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl GeneratorParams {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.node_budget == 0 {
            return Err(DomainError::InvalidParams {
                message: "node budget must be at least 1".to_string(),
            });
        }
        if self.max_level > MAX_SUPPORTED_LEVEL {
            return Err(DomainError::InvalidParams {
                message: format!(
                    "max level {} exceeds supported maximum {}",
                    self.max_level, MAX_SUPPORTED_LEVEL
                ),
            });
        }
        Ok(())
    }
}

/// Inclusive child-count range before the budget cap is applied.
pub fn branching_range(level: usize) -> (usize, usize) {
    if level < 2 {
        (2, 4)
    } else {
        (1, 6)
    }
}

/// Child-count range after capping by the remaining budget.
///
/// The upper bound is limited to `remaining / (max_level - level)`. When that
/// cap drops below the base lower bound, the lower bound follows it down, so
/// the range is always well-formed and may be `(0, 0)`.
pub fn capped_branching_range(level: usize, max_level: usize, remaining: usize) -> (usize, usize) {
    let (lower, upper) = branching_range(level);
    let levels_left = max_level.saturating_sub(level).max(1);
    let upper = upper.min(remaining / levels_left);
    (lower.min(upper), upper)
}

/// Uniform draw from `[0, bound)`; a zero bound yields zero.
fn below<R: Rng>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        0
    } else {
        rng.gen_range(0..bound)
    }
}

fn pick<R: Rng>(rng: &mut R, items: &[&'static str]) -> &'static str {
    // Catalog tables are never empty.
    items.choose(rng).copied().unwrap_or_default()
}

/// Generates random organizational charts.
///
/// Each call to [`generate`](Self::generate) uses its own budget. One instance
/// cannot run two generations at once (`&mut self`); use separate instances
/// for concurrent work.
pub struct OrgTreeGenerator {
    params: GeneratorParams,
    rng: StdRng,
}

impl Default for OrgTreeGenerator {
    fn default() -> Self {
        Self::new(GeneratorParams::default())
    }
}

impl OrgTreeGenerator {
    /// Generator seeded from OS entropy.
    pub fn new(params: GeneratorParams) -> Self {
        Self {
            params,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator: equal seeds and params produce equal charts.
    pub fn with_seed(params: GeneratorParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one chart.
    ///
    /// The root is present whenever the node budget is at least 1.
    #[instrument(level = "debug", skip(self), fields(budget = self.params.node_budget, max_level = self.params.max_level))]
    pub fn generate(&mut self) -> Option<OrgNode> {
        let mut budget = NodeBudget::new(self.params.node_budget);
        let root = self.build_node(0, self.params.max_level, &mut budget);
        debug!(
            "generated {} of {} nodes",
            budget.produced(),
            budget.limit()
        );
        root
    }

    /// Build a node at `level` and, budget permitting, its subtree.
    ///
    /// Returns `None` when the budget is already exhausted.
    fn build_node(
        &mut self,
        level: usize,
        max_level: usize,
        budget: &mut NodeBudget,
    ) -> Option<OrgNode> {
        if budget.is_exhausted() {
            return None;
        }

        let department = pick(&mut self.rng, catalog::DEPARTMENTS);
        let mut node = OrgNode {
            id: self.random_id(),
            name: self.random_name(),
            position: pick(&mut self.rng, catalog::titles_for_level(level)).to_string(),
            department: department.to_string(),
            job_function: catalog::job_function_for_department(department),
            headcount: self.random_headcount(level),
            level,
            is_managerial: catalog::is_managerial(level),
            children: Vec::new(),
        };

        budget.charge();

        if level < max_level && !budget.is_exhausted() {
            let (lower, upper) = capped_branching_range(level, max_level, budget.remaining());
            let wanted = self.rng.gen_range(lower..=upper);
            trace!("level {}: {} children from [{}, {}]", level, wanted, lower, upper);

            for _ in 0..wanted {
                if budget.is_exhausted() {
                    break;
                }
                if let Some(child) = self.build_node(level + 1, max_level, budget) {
                    node.children.push(child);
                }
            }
        }

        Some(node)
    }

    fn random_id(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn random_name(&mut self) -> String {
        let first = pick(&mut self.rng, catalog::FIRST_NAMES);
        let last = pick(&mut self.rng, catalog::LAST_NAMES);
        format!("{} {}", first, last)
    }

    fn random_headcount(&mut self, level: usize) -> Headcount {
        match catalog::headcount_range_for_level(level) {
            None => catalog::fixed_headcount(),
            Some(range) => {
                let active = below(&mut self.rng, range.active);
                let inactive = below(&mut self.rng, range.inactive);
                let open = below(&mut self.rng, range.open);
                Headcount::new(active, inactive, open)
            }
        }
    }
}

/// Generate a chart with default parameters (10,000 nodes, 8 levels).
pub fn generate_org_chart() -> OrgNode {
    let mut generator = OrgTreeGenerator::default();
    match generator.generate() {
        Some(root) => root,
        // default budget is non-zero, so the root always exists
        None => unreachable!("default node budget is non-zero"),
    }
}
