// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Note what is *not* here: a missing key is never an error. Lookups report
/// absence through [`crate::domain::Lookup::NotFound`].
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid record '{input}': {reason}")]
    InvalidRecord { input: String, reason: String },

    #[error("Invalid store operation '{input}': {reason}")]
    InvalidOp { input: String, reason: String },

    // ========================================================================
    // Arithmetic
    // ========================================================================
    #[error("Adding {delta} to {total} overflows a 64-bit total")]
    Overflow { total: i64, delta: i64 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRecord { .. } => vec![
                "Records are written as VALUE,NEXT".into(),
                "Example: 5,8".into(),
            ],
            Self::InvalidOp { .. } => vec![
                "Operations are written as:".into(),
                "  • put:KEY=VALUE,NEXT".into(),
                "  • get:KEY".into(),
                "  • delete:KEY (or del:KEY)".into(),
            ],
            Self::Overflow { .. } => vec![
                "The running total left the 64-bit range".into(),
                "Drop --checked to use wrapping arithmetic".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRecord { .. } | Self::InvalidOp { .. } => ErrorCategory::Validation,
            Self::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Arithmetic,
}
