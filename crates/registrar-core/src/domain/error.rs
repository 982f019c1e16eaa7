// ============================================================================
// domain/error.rs - ENROLLMENT ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// The display text of each variant is part of the public contract: callers
/// (and the controller's `ERROR: ` lines) match on these messages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Student not found with ID: {id}")]
    StudentNotFound { id: String },

    #[error("Course not found with ID: {id}")]
    CourseNotFound { id: String },

    #[error("Enrollment not found for student {student_id} in course {course_id}")]
    EnrollmentNotFound {
        student_id: String,
        course_id: String,
    },

    // ========================================================================
    // Business Rule Violations (409-level equivalent)
    // ========================================================================
    #[error("Student exceeds maximum credit limit")]
    CreditLimitExceeded {
        student_id: String,
        requested: u32,
        max: u32,
    },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Grade must be a finite number")]
    InvalidGrade { grade: f64 },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StudentNotFound { id } => vec![
                format!("No student is registered with ID '{}'", id),
                "Try: registrar list students".into(),
            ],
            Self::CourseNotFound { id } => vec![
                format!("No course is registered with ID '{}'", id),
                "Try: registrar list courses".into(),
            ],
            Self::EnrollmentNotFound {
                student_id,
                course_id,
            } => vec![
                format!("Enroll first: registrar enroll {} {}", student_id, course_id),
                "Grades can only be recorded for existing enrollments".into(),
            ],
            Self::CreditLimitExceeded {
                student_id,
                requested,
                max,
            } => vec![
                format!(
                    "Student '{}' would carry {} credits but the limit is {}",
                    student_id, requested, max
                ),
                "Choose a course with fewer credits".into(),
            ],
            Self::InvalidGrade { grade } => vec![format!("Received grade: {}", grade)],
            Self::InvalidRecord(msg) => vec![
                "Check the roster file".into(),
                format!("Details: {}", msg),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StudentNotFound { .. }
            | Self::CourseNotFound { .. }
            | Self::EnrollmentNotFound { .. } => ErrorCategory::NotFound,
            Self::CreditLimitExceeded { .. } => ErrorCategory::BusinessRule,
            Self::InvalidGrade { .. } | Self::InvalidRecord(_) => ErrorCategory::Validation,
        }
    }
}
