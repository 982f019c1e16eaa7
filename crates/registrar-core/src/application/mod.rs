//! Application layer for Registrar.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (EnrollmentService)
//! - **Controller**: Turns service outcomes into result lines
//! - **Ports**: Repository traits implemented by infrastructure
//! - **Errors**: Application-specific error types

pub mod controller;
pub mod error;
pub mod ports;
pub mod services;

pub use controller::EnrollmentController;
pub use services::EnrollmentService;

// Re-export port traits (for adapter implementation)
pub use ports::{CourseRepository, EnrollmentRepository, StudentRepository};

pub use error::ApplicationError;
