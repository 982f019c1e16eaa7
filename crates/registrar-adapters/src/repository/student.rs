//! In-memory student repository.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use registrar_core::{
    application::{ApplicationError, ports::StudentRepository},
    domain::Student,
    error::RegistrarResult,
};

/// Thread-safe in-memory student store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    inner: Arc<RwLock<HashMap<String, Student>>>,
}

impl InMemoryStudentRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of students.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or_default()
    }

    /// Check if repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn find_by_id(&self, id: &str) -> RegistrarResult<Option<Student>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(id).cloned())
    }

    fn save(&self, student: Student) -> RegistrarResult<Student> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(student.id().to_string(), student.clone());
        Ok(student)
    }

    fn find_all(&self) -> RegistrarResult<Vec<Student>> {
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
    fn save_returns_the_record() {
        let repo = InMemoryStudentRepository::new();
        let saved = repo
            .save(Student::new("S001", "John Doe", "john@example.com", 18))
            .unwrap();

        assert_eq!(saved.id(), "S001");
        assert_eq!(saved.name(), "John Doe");
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let repo = InMemoryStudentRepository::new();
        repo.save(Student::new("S001", "John Doe", "john@example.com", 18))
            .unwrap();

        assert_eq!(repo.find_by_id("S001").unwrap().unwrap().id(), "S001");
        assert!(repo.find_by_id("S999").unwrap().is_none());
    }

    #[test]
    fn save_overwrites_by_id() {
        let repo = InMemoryStudentRepository::new();
        repo.save(Student::new("S001", "John Doe", "john@example.com", 18))
            .unwrap();

        let mut updated = repo.find_by_id("S001").unwrap().unwrap();
        updated.add_credits(3);
        repo.save(updated).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id("S001").unwrap().unwrap().current_credits(), 3);
    }

    #[test]
    fn find_all_empty_and_multiple() {
        let repo = InMemoryStudentRepository::new();
        assert!(repo.find_all().unwrap().is_empty());
        assert!(repo.is_empty());

        repo.save(Student::new("S001", "John Doe", "john@example.com", 18))
            .unwrap();
        repo.save(Student::new("S002", "Jane Smith", "jane@example.com", 18))
            .unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn clones_share_state() {
        let repo = InMemoryStudentRepository::new();
        let handle = repo.clone();
        repo.save(Student::new("S001", "John Doe", "john@example.com", 18))
            .unwrap();

        assert!(handle.find_by_id("S001").unwrap().is_some());
    }
}
