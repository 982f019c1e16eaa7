//! Application services - orchestrate use cases.

pub mod enrollment_service;

pub use enrollment_service::EnrollmentService;
