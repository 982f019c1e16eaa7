//! Registrar Core - Layered Enrollment Implementation
//!
//! This crate provides the domain and application layers for the Registrar
//! enrollment system, following a ports and adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          registrar-cli (CLI)            │
//! │        (Drives the controller)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         EnrollmentController            │
//! │   (Errors become tagged result lines)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           EnrollmentService             │
//! │   (Business rules, GPA computation)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Repository Ports (Traits)        │
//! │   (Student, Course, Enrollment stores)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   registrar-adapters (Infrastructure)   │
//! │   (In-memory repositories, roster)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registrar_core::application::{EnrollmentController, EnrollmentService};
//!
//! // Repositories come from registrar-adapters (or any other port impl).
//! let service = EnrollmentService::new(students, courses, enrollments);
//! let controller = EnrollmentController::new(service);
//!
//! println!("{}", controller.enroll_student("S001", "C001"));
//! println!("{}", controller.student_gpa("S001"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EnrollmentController, EnrollmentService,
        ports::{CourseRepository, EnrollmentRepository, StudentRepository},
    };
    pub use crate::domain::{Course, DomainError, Enrollment, Student};
    pub use crate::error::{ErrorCategory, RegistrarError, RegistrarResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
