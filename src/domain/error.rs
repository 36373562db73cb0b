//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid generation requests.
/// Budget exhaustion is not an error; it ends recursion normally.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid generator parameters: {message}")]
    InvalidParams { message: String },

    #[error("headcount total {total} does not match {active} active + {inactive} inactive + {open} open")]
    InconsistentHeadcount {
        active: u32,
        inactive: u32,
        open: u32,
        total: u32,
    },
}
