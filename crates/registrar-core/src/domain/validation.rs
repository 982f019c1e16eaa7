use crate::domain::{
    entities::{Course, Student},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Records built in code are trusted; these checks guard data arriving from
/// outside (roster files, CLI input).
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_student(student: &Student) -> Result<(), DomainError> {
        if student.id().trim().is_empty() {
            return Err(DomainError::InvalidRecord("student id is empty".into()));
        }
        if student.max_credits() == 0 {
            return Err(DomainError::InvalidRecord(format!(
                "student '{}' must allow at least one credit",
                student.id()
            )));
        }
        if student.current_credits() > student.max_credits() {
            return Err(DomainError::InvalidRecord(format!(
                "student '{}' already exceeds its credit limit",
                student.id()
            )));
        }
        Ok(())
    }

    pub fn validate_course(course: &Course) -> Result<(), DomainError> {
        if course.id().trim().is_empty() {
            return Err(DomainError::InvalidRecord("course id is empty".into()));
        }
        if course.credits() == 0 {
            return Err(DomainError::InvalidRecord(format!(
                "course '{}' must be worth at least one credit",
                course.id()
            )));
        }
        Ok(())
    }

    pub fn validate_grade(grade: f64) -> Result<(), DomainError> {
        if grade.is_finite() {
            Ok(())
        } else {
            Err(DomainError::InvalidGrade { grade })
        }
    }
}
