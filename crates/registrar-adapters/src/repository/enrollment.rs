//! In-memory enrollment repository.

use std::sync::{Arc, RwLock};

use registrar_core::{
    application::{ApplicationError, ports::EnrollmentRepository},
    domain::Enrollment,
    error::RegistrarResult,
};

/// Thread-safe in-memory enrollment list, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnrollmentRepository {
    inner: Arc<RwLock<Vec<Enrollment>>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnrollmentRepository for InMemoryEnrollmentRepository {
    fn save(&self, enrollment: Enrollment) -> RegistrarResult<Enrollment> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.push(enrollment.clone());
        Ok(enrollment)
    }

    fn find_by_student_id(&self, student_id: &str) -> RegistrarResult<Vec<Enrollment>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .iter()
            .filter(|e| e.student_id() == student_id)
            .cloned()
            .collect())
    }

    fn find_by_student_and_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> RegistrarResult<Option<Enrollment>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.iter().find(|e| e.is_for(student_id, course_id)).cloned())
    }

    fn update_grade(
        &self,
        student_id: &str,
        course_id: &str,
        grade: f64,
    ) -> RegistrarResult<Option<Enrollment>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .iter_mut()
            .find(|e| e.is_for(student_id, course_id))
            .map(|e| {
                e.set_grade(grade);
                e.clone()
            }))
    }

    fn find_all(&self) -> RegistrarResult<Vec<Enrollment>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.clone())
    }
}
