//! Infrastructure adapters for Registrar.
//!
//! This crate implements the ports defined in `registrar-core::application::ports`
//! and loads the seed roster the CLI starts from.

pub mod builtin_roster;
pub mod repository;
pub mod roster_loader;

// Re-export commonly used adapters
pub use repository::{
    InMemoryCourseRepository, InMemoryEnrollmentRepository, InMemoryStudentRepository,
};
pub use roster_loader::{Roster, RosterLoader};
