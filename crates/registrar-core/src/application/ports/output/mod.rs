//! Driven (output) ports - implemented by infrastructure.
//!
//! Lookups return `Option` for absence; the `Err` side is reserved for the
//! store itself failing. The `registrar-adapters` crate provides in-memory
//! implementations.

use crate::domain::{Course, Enrollment, Student};
use crate::error::RegistrarResult;

/// Port for student storage.
///
/// Implemented by:
/// - `registrar_adapters::repository::InMemoryStudentRepository`
#[cfg_attr(test, mockall::automock)]
pub trait StudentRepository: Send + Sync {
    /// Find a student by id.
    fn find_by_id(&self, id: &str) -> RegistrarResult<Option<Student>>;

    /// Insert or overwrite a student by id. Last write wins.
    fn save(&self, student: Student) -> RegistrarResult<Student>;

    /// All students, in no particular order.
    fn find_all(&self) -> RegistrarResult<Vec<Student>>;
}

/// Port for course storage.
///
/// Implemented by:
/// - `registrar_adapters::repository::InMemoryCourseRepository`
#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository: Send + Sync {
    /// Find a course by id.
    fn find_by_id(&self, id: &str) -> RegistrarResult<Option<Course>>;

    /// Insert or overwrite a course by id. Last write wins.
    fn save(&self, course: Course) -> RegistrarResult<Course>;

    /// All courses, in no particular order.
    fn find_all(&self) -> RegistrarResult<Vec<Course>>;
}

/// Port for enrollment storage.
///
/// Implemented by:
/// - `registrar_adapters::repository::InMemoryEnrollmentRepository`
///
/// ## Design Notes
///
/// - `save` appends; the same (student, course) pair may be stored twice
/// - Pair lookups return the first match in insertion order
#[cfg_attr(test, mockall::automock)]
pub trait EnrollmentRepository: Send + Sync {
    /// Store a new enrollment.
    fn save(&self, enrollment: Enrollment) -> RegistrarResult<Enrollment>;

    /// Every enrollment of a student. Empty when there are none.
    fn find_by_student_id(&self, student_id: &str) -> RegistrarResult<Vec<Enrollment>>;

    /// The enrollment linking a student to a course, if any.
    fn find_by_student_and_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> RegistrarResult<Option<Enrollment>>;

    /// Set the grade on the enrollment for a pair, returning the updated record.
    fn update_grade(
        &self,
        student_id: &str,
        course_id: &str,
        grade: f64,
    ) -> RegistrarResult<Option<Enrollment>>;

    /// All enrollments in insertion order.
    fn find_all(&self) -> RegistrarResult<Vec<Enrollment>>;
}
