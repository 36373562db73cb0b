//! Domain entities: core data structures

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Coarse classification of a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFunction {
    pub job_function_id: u32,
    pub function: String,
}

/// Staffing figures of a node.
///
/// Construct through [`Headcount::new`] so `total` always matches the parts;
/// deserialization rejects a mismatched `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawHeadcount")]
pub struct Headcount {
    pub active: u32,
    pub inactive: u32,
    pub open: u32,
    pub total: u32,
}

impl Headcount {
    pub fn new(active: u32, inactive: u32, open: u32) -> Self {
        Self {
            active,
            inactive,
            open,
            total: active + inactive + open,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.active + self.inactive + self.open
    }
}

/// Wire form of [`Headcount`] before the total is checked.
#[derive(Deserialize)]
struct RawHeadcount {
    active: u32,
    inactive: u32,
    open: u32,
    total: u32,
}

impl TryFrom<RawHeadcount> for Headcount {
    type Error = DomainError;

    fn try_from(raw: RawHeadcount) -> Result<Self, Self::Error> {
        let sum = raw
            .active
            .checked_add(raw.inactive)
            .and_then(|s| s.checked_add(raw.open));
        if sum != Some(raw.total) {
            return Err(DomainError::InconsistentHeadcount {
                active: raw.active,
                inactive: raw.inactive,
                open: raw.open,
                total: raw.total,
            });
        }
        Ok(Headcount::new(raw.active, raw.inactive, raw.open))
    }
}

impl std::ops::Add for Headcount {
    type Output = Headcount;

    fn add(self, rhs: Headcount) -> Headcount {
        Headcount::new(
            self.active + rhs.active,
            self.inactive + rhs.inactive,
            self.open + rhs.open,
        )
    }
}

/// A position in the generated organization.
///
/// Children are owned by their parent; the root is owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgNode {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub department: String,
    pub job_function: JobFunction,
    pub headcount: Headcount,
    pub level: usize,
    pub is_managerial: bool,
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OrgNode::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree (a lone node has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OrgNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order, left-to-right traversal.
    pub fn iter(&self) -> OrgNodeIter<'_> {
        OrgNodeIter { stack: vec![self] }
    }
}

pub struct OrgNodeIter<'a> {
    stack: Vec<&'a OrgNode>,
}

impl<'a> Iterator for OrgNodeIter<'a> {
    type Item = &'a OrgNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
