//! Unified error handling for Registrar Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Registrar Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistrarError {
    /// Errors from the domain layer (missing records, rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (store access, seed data).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl RegistrarError {
    /// The bare message of the wrapped error, without the layer prefix.
    ///
    /// This is the text the controller surfaces after `ERROR: `.
    pub fn message(&self) -> String {
        match self {
            Self::Domain(e) => e.to_string(),
            Self::Application(e) => e.to_string(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    BusinessRule,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type RegistrarResult<T> = Result<T, RegistrarError>;
