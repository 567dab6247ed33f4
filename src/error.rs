//! Error types for loan calculations

use thiserror::Error;

/// Errors raised while validating or resolving a loan
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Invalid term: {months} months (term must be at least one month)")]
    InvalidTerm { months: u32 },
}

impl LoanError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type LoanResult<T> = Result<T, LoanError>;
