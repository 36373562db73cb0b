//! Summary statistics over a generated chart

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::entities::{Headcount, OrgNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartStats {
    pub total_nodes: usize,
    /// Deepest level present (root = 0)
    pub max_level: usize,
    pub leaf_count: usize,
    pub managerial_count: usize,
    pub nodes_per_level: BTreeMap<usize, usize>,
    pub headcount: Headcount,
}

impl ChartStats {
    pub fn collect(root: &OrgNode) -> Self {
        let mut stats = ChartStats {
            total_nodes: 0,
            max_level: 0,
            leaf_count: 0,
            managerial_count: 0,
            nodes_per_level: BTreeMap::new(),
            headcount: Headcount::default(),
        };

        for node in root.iter() {
            stats.total_nodes += 1;
            stats.max_level = stats.max_level.max(node.level);
            if node.is_leaf() {
                stats.leaf_count += 1;
            }
            if node.is_managerial {
                stats.managerial_count += 1;
            }
            *stats.nodes_per_level.entry(node.level).or_insert(0) += 1;
            stats.headcount = stats.headcount + node.headcount;
        }

        stats
    }
}

impl fmt::Display for ChartStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:       {}", self.total_nodes)?;
        writeln!(f, "max level:   {}", self.max_level)?;
        writeln!(f, "leaves:      {}", self.leaf_count)?;
        writeln!(f, "managerial:  {}", self.managerial_count)?;
        writeln!(
            f,
            "headcount:   {} active, {} inactive, {} open ({} total)",
            self.headcount.active, self.headcount.inactive, self.headcount.open, self.headcount.total
        )?;
        write!(f, "per level:  ")?;
        for (level, count) in &self.nodes_per_level {
            write!(f, " L{}={}", level, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::{GeneratorParams, OrgTreeGenerator};

    #[test]
    fn given_generated_chart_when_collecting_stats_then_counts_agree_with_tree() {
        let root = OrgTreeGenerator::with_seed(GeneratorParams::default(), 5)
            .generate()
            .unwrap();

        let stats = ChartStats::collect(&root);

        assert_eq!(stats.total_nodes, root.node_count());
        assert_eq!(stats.max_level + 1, root.depth());
        assert_eq!(
            stats.nodes_per_level.values().sum::<usize>(),
            stats.total_nodes
        );
        assert_eq!(stats.nodes_per_level.get(&0), Some(&1));
        assert!(stats.headcount.is_consistent());
        assert!(stats.leaf_count >= 1);
    }

    #[test]
    fn given_stats_when_displaying_then_lists_levels() {
        let root = OrgTreeGenerator::with_seed(
            GeneratorParams {
                node_budget: 20,
                max_level: 2,
            },
            9,
        )
        .generate()
        .unwrap();

        let out = ChartStats::collect(&root).to_string();
        assert!(out.contains("nodes:"));
        assert!(out.contains("L0=1"));
    }
}
