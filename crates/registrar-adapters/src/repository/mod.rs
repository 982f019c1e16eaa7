//! In-memory repository adapters.
//!
//! Each repository is a cheap `Clone` handle over shared state, so a test can
//! keep one handle while the service owns another.

mod course;
mod enrollment;
mod student;

pub use course::InMemoryCourseRepository;
pub use enrollment::InMemoryEnrollmentRepository;
pub use student::InMemoryStudentRepository;
