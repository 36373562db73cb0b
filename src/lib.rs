//! Synthetic organizational chart generator
//!
//! Produces a bounded random hierarchy of [`domain::OrgNode`]s for grid UI
//! stress-testing. [`generate_org_chart`] is the zero-argument entry point;
//! [`domain::OrgTreeGenerator`] allows custom shapes and seeded runs.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{generate_org_chart, OrgNode, OrgTreeGenerator};
