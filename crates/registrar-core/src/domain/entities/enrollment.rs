use serde::{Deserialize, Serialize};

/// Links one student to one course and carries the grade earned there.
///
/// Both ids are plain references; existence is only checked by the service
/// at enrollment time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    student_id: String,
    course_id: String,
    grade: f64,
}

impl Enrollment {
    /// New enrollment with the default grade of `0.0`.
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            grade: 0.0,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Overwrite the grade. May be called any number of times.
    pub fn set_grade(&mut self, grade: f64) {
        self.grade = grade;
    }

    /// Whether this enrollment belongs to the given pair.
    pub fn is_for(&self, student_id: &str, course_id: &str) -> bool {
        self.student_id == student_id && self.course_id == course_id
    }
}
