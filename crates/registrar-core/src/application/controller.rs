//! Enrollment Controller - the outermost layer of the core.
//!
//! Every call returns a line of text. Service errors are folded into an
//! `ERROR: <message>` line and never escape.

use tracing::debug;

use crate::application::EnrollmentService;

/// Thin adapter from service results to tagged result lines.
pub struct EnrollmentController {
    service: EnrollmentService,
}

impl EnrollmentController {
    pub fn new(service: EnrollmentService) -> Self {
        Self { service }
    }

    /// Access the wrapped service, for callers that need raw values.
    pub fn service(&self) -> &EnrollmentService {
        &self.service
    }

    /// `SUCCESS: Student <sid> enrolled in course <cid>` or `ERROR: <message>`.
    pub fn enroll_student(&self, student_id: &str, course_id: &str) -> String {
        match self.service.enroll(student_id, course_id) {
            Ok(_) => format!("SUCCESS: Student {student_id} enrolled in course {course_id}"),
            Err(e) => {
                debug!(error = %e, "enroll_student failed");
                format!("ERROR: {}", e.message())
            }
        }
    }

    /// `GPA for student <sid>: <gpa>` with two decimals, or `ERROR: <message>`.
    pub fn student_gpa(&self, student_id: &str) -> String {
        self.student_gpa_with_precision(student_id, 2)
    }

    /// Same as [`Self::student_gpa`] with a caller-chosen number of decimals.
    pub fn student_gpa_with_precision(&self, student_id: &str, precision: usize) -> String {
        match self.service.calculate_gpa(student_id) {
            Ok(gpa) => format!("GPA for student {student_id}: {gpa:.precision$}"),
            Err(e) => {
                debug!(error = %e, "student_gpa failed");
                format!("ERROR: {}", e.message())
            }
        }
    }

    /// `SUCCESS: Grade <g> recorded for student <sid> in course <cid>` or `ERROR: <message>`.
    pub fn assign_grade(&self, student_id: &str, course_id: &str, grade: f64) -> String {
        match self.service.assign_grade(student_id, course_id, grade) {
            Ok(e) => format!(
                "SUCCESS: Grade {:.2} recorded for student {} in course {}",
                e.grade(),
                student_id,
                course_id
            ),
            Err(e) => {
                debug!(error = %e, "assign_grade failed");
                format!("ERROR: {}", e.message())
            }
        }
    }
}
