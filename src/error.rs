//! Error types for the EMD pipeline.

use thiserror::Error;

/// Fatal failures of an EMD computation.
///
/// Input validation happens before any LP work, so `InvalidInput` never
/// follows a solve. The solver variants are produced only by
/// [`Solver::optimize`](crate::Solver::optimize).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmdError {
    /// Empty samples, non-finite samples, a zero divisor, or mismatched shapes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The solver proved the program infeasible or unbounded.
    #[error("solver reported {status} status")]
    SolverInfeasible { status: crate::Status },

    /// The solver stopped without proving optimality.
    #[error("solver stopped without an optimal solution ({status} status)")]
    SolverFailed { status: crate::Status },
}

impl EmdError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EmdError::InvalidInput(reason.into())
    }
}

/// Convenience alias for results carrying an [`EmdError`].
pub type Result<T> = std::result::Result<T, EmdError>;
