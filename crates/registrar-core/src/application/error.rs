//! Application layer errors.
//!
//! These errors represent failures in orchestration and storage access, not
//! enrollment rules. Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Repository access failed (lock poisoned).
    #[error("Repository store error")]
    StoreLockError,

    /// Seed roster could not be read or parsed.
    #[error("Roster could not be loaded: {reason}")]
    RosterLoad { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreLockError => vec![
                "A repository lock was poisoned by a panicking thread".into(),
                "Restart the session".into(),
            ],
            Self::RosterLoad { reason } => vec![
                format!("Roster problem: {}", reason),
                "Check the file passed with --roster or set in roster.path".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreLockError => ErrorCategory::Internal,
            Self::RosterLoad { .. } => ErrorCategory::Configuration,
        }
    }
}
