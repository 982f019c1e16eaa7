//! Enrollment Service - the business rules of registration.
//!
//! Enrolling checks, in this order and stopping at the first failure:
//! 1. The student exists
//! 2. The course exists
//! 3. The course still fits under the student's credit limit
//!
//! Only when all three pass are the updated student and the enrollment
//! written back, in that order. If the enrollment write fails the original
//! student record is restored. GPA is the credit-weighted mean of enrollment
//! grades.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CourseRepository, EnrollmentRepository, StudentRepository},
    },
    domain::{DomainError, DomainValidator as validator, Enrollment},
    error::RegistrarResult,
};

/// Main enrollment service.
///
/// Holds no records of its own; everything lives in the injected
/// repositories. The only internal state is a table of per-student locks
/// that serialises concurrent `enroll` calls for the same student. An entry
/// lives only while some `enroll` for that student holds or waits on it.
pub struct EnrollmentService {
    students: Box<dyn StudentRepository>,
    courses: Box<dyn CourseRepository>,
    enrollments: Box<dyn EnrollmentRepository>,
    student_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl EnrollmentService {
    /// Create a new enrollment service with the given repositories.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use registrar_core::application::EnrollmentService;
    ///
    /// let service = EnrollmentService::new(
    ///     Box::new(students),    // impl StudentRepository
    ///     Box::new(courses),     // impl CourseRepository
    ///     Box::new(enrollments), // impl EnrollmentRepository
    /// );
    /// ```
    pub fn new(
        students: Box<dyn StudentRepository>,
        courses: Box<dyn CourseRepository>,
        enrollments: Box<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            students,
            courses,
            enrollments,
            student_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Enroll a student in a course.
    ///
    /// On success exactly one enrollment and one student record are written.
    /// On any failure nothing is written.
    #[instrument(skip(self))]
    pub fn enroll(&self, student_id: &str, course_id: &str) -> RegistrarResult<Enrollment> {
        let lock = self.student_lock(student_id)?;
        let result = match lock.lock() {
            Ok(_guard) => self.enroll_locked(student_id, course_id),
            Err(_) => Err(ApplicationError::StoreLockError.into()),
        };
        self.release_student_lock(student_id, lock);
        result
    }

    /// Credit-weighted GPA of a student.
    ///
    /// Returns `0.0` when the student has no enrollments. Enrollments whose
    /// course can no longer be found are skipped entirely.
    #[instrument(skip(self))]
    pub fn calculate_gpa(&self, student_id: &str) -> RegistrarResult<f64> {
        self.students
            .find_by_id(student_id)?
            .ok_or_else(|| DomainError::StudentNotFound {
                id: student_id.to_string(),
            })?;

        let enrollments = self.enrollments.find_by_student_id(student_id)?;
        if enrollments.is_empty() {
            return Ok(0.0);
        }

        let mut total_points = 0.0;
        let mut total_credits = 0.0;

        for enrollment in &enrollments {
            match self.courses.find_by_id(enrollment.course_id())? {
                Some(course) => {
                    let credits = f64::from(course.credits());
                    total_points += enrollment.grade() * credits;
                    total_credits += credits;
                }
                None => debug!(
                    course_id = enrollment.course_id(),
                    "Course missing, enrollment left out of GPA"
                ),
            }
        }

        Ok(if total_credits > 0.0 {
            total_points / total_credits
        } else {
            0.0
        })
    }

    /// Record a grade for an existing enrollment.
    #[instrument(skip(self))]
    pub fn assign_grade(
        &self,
        student_id: &str,
        course_id: &str,
        grade: f64,
    ) -> RegistrarResult<Enrollment> {
        validator::validate_grade(grade)?;

        let enrollment = self
            .enrollments
            .update_grade(student_id, course_id, grade)?
            .ok_or_else(|| DomainError::EnrollmentNotFound {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            })?;

        info!("Grade recorded");
        Ok(enrollment)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// The three checks and both writes. Caller holds the student's lock.
    fn enroll_locked(&self, student_id: &str, course_id: &str) -> RegistrarResult<Enrollment> {
        // 1. Student must exist
        let mut student = self
            .students
            .find_by_id(student_id)?
            .ok_or_else(|| DomainError::StudentNotFound {
                id: student_id.to_string(),
            })?;

        // 2. Course must exist
        let course = self
            .courses
            .find_by_id(course_id)?
            .ok_or_else(|| DomainError::CourseNotFound {
                id: course_id.to_string(),
            })?;

        // 3. Credit limit
        if !student.can_take(course.credits()) {
            warn!(
                current = student.current_credits(),
                adding = course.credits(),
                max = student.max_credits(),
                "Enrollment rejected: credit limit"
            );
            return Err(DomainError::CreditLimitExceeded {
                student_id: student_id.to_string(),
                requested: student.projected_credits(course.credits()),
                max: student.max_credits(),
            }
            .into());
        }

        let original = student.clone();
        student.add_credits(course.credits());
        let student = self.students.save(student)?;

        let enrollment = match self.enrollments.save(Enrollment::new(student_id, course_id)) {
            Ok(enrollment) => enrollment,
            Err(err) => {
                warn!(error = %err, "Enrollment write failed, restoring student");
                if let Err(restore) = self.students.save(original) {
                    error!(error = %restore, "Student record could not be restored");
                }
                return Err(err);
            }
        };

        info!(
            credits = student.current_credits(),
            max = student.max_credits(),
            "Enrollment recorded"
        );
        Ok(enrollment)
    }

    /// Lock guarding the read-check-write sequence for one student.
    ///
    /// Clones are only handed out under the table mutex, so the strong count
    /// seen there is exact.
    fn student_lock(&self, student_id: &str) -> RegistrarResult<Arc<Mutex<()>>> {
        let mut locks = self
            .student_locks
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(Arc::clone(locks.entry(student_id.to_string()).or_default()))
    }

    /// Drop the table entry once nobody else holds or waits on it.
    fn release_student_lock(&self, student_id: &str, lock: Arc<Mutex<()>>) {
        let Ok(mut locks) = self.student_locks.lock() else {
            debug!("Lock table poisoned, entry left in place");
            return;
        };

        // One reference in the table, one in `lock`.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(student_id);
        }
    }

    #[cfg(test)]
    fn lock_count(&self) -> usize {
        self.student_locks.lock().map(|locks| locks.len()).unwrap_or(0)
    }
}
