//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from storage. Adapters in
//! `registrar-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the service, implemented by infrastructure
//!   - `StudentRepository`: Student records keyed by id
//!   - `CourseRepository`: Course records keyed by id
//!   - `EnrollmentRepository`: Enrollment list with pair lookups

pub mod output;

pub use output::{CourseRepository, EnrollmentRepository, StudentRepository};

#[cfg(test)]
pub use output::{MockCourseRepository, MockEnrollmentRepository, MockStudentRepository};
