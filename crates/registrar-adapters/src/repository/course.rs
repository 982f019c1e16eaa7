//! In-memory course repository.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use registrar_core::{
    application::{ApplicationError, ports::CourseRepository},
    domain::Course,
    error::RegistrarResult,
};

/// Thread-safe in-memory course store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseRepository {
    inner: Arc<RwLock<HashMap<String, Course>>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop a course. Existing enrollments keep pointing at the old id.
    pub fn remove(&self, id: &str) -> RegistrarResult<Option<Course>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.remove(id))
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn find_by_id(&self, id: &str) -> RegistrarResult<Option<Course>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(id).cloned())
    }

    fn save(&self, course: Course) -> RegistrarResult<Course> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(course.id().to_string(), course.clone());
        Ok(course)
    }

    fn find_all(&self) -> RegistrarResult<Vec<Course>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_find() {
        let repo = InMemoryCourseRepository::new();
        let saved = repo.save(Course::new("C001", "Math 101", 3)).unwrap();

        assert_eq!(saved.credits(), 3);
        assert_eq!(repo.find_by_id("C001").unwrap().unwrap().id(), "C001");
        assert!(repo.find_by_id("C999").unwrap().is_none());
    }

    #[test]
    fn find_all_lists_every_course() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new("C001", "Math 101", 3)).unwrap();
        repo.save(Course::new("C002", "Physics 101", 4)).unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn last_write_wins() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new("C001", "Math 101", 3)).unwrap();
        repo.save(Course::new("C001", "Math 101 (honors)", 4)).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id("C001").unwrap().unwrap().credits(), 4);
    }

    #[test]
    fn remove_returns_dropped_course() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new("C001", "Math 101", 3)).unwrap();

        assert!(repo.remove("C001").unwrap().is_some());
        assert!(repo.remove("C001").unwrap().is_none());
        assert!(repo.is_empty());
    }
}
