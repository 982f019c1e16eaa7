//! Core domain layer for Registrar.
//!
//! Plain records (students, courses, enrollments) plus the error vocabulary
//! the service speaks. No I/O and no repository access happens here.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Storage is reached only through application ports
//! - **Value records**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;

mod validation;

// Re-exports for convenience
pub use entities::{Course, Enrollment, Student};
pub use error::DomainError;
pub use validation::DomainValidator;
