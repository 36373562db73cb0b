//! Domain layer: entities and generation logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod budget;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod generator;
pub mod stats;

pub use budget::NodeBudget;
pub use entities::*;
pub use error::DomainError;
pub use generator::{generate_org_chart, GeneratorParams, OrgTreeGenerator};
pub use stats::ChartStats;
