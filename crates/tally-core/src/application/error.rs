//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Shared store access failed (lock poisoned by a panicking writer).
    #[error("Snapshot store lock poisoned")]
    StoreLockError,

    /// No accumulator registered under this name.
    #[error("Unknown accumulator '{name}'")]
    UnknownAccumulator { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreLockError => vec![
                "A writer panicked while holding the store lock".into(),
                "Recreate the store; its contents may be partially updated".into(),
            ],
            Self::UnknownAccumulator { name } => vec![
                format!("Create it first: create(\"{name}\")"),
                "Accumulator names are case-sensitive".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreLockError => ErrorCategory::Internal,
            Self::UnknownAccumulator { .. } => ErrorCategory::NotFound,
        }
    }
}
