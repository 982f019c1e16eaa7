//! Built-in sample roster.
//!
//! Used whenever no roster file is configured, so `registrar demo` and a
//! bare `registrar enroll S001 C001` work out of the box.
//!
//! | Student | Name       | Max credits |
//! |---------|------------|-------------|
//! | S001    | John Doe   | 18          |
//! | S002    | Jane Smith | 12          |
//!
//! | Course | Name          | Credits |
//! |--------|---------------|---------|
//! | C001   | Math 101      | 3       |
//! | C002   | Physics 101   | 4       |
//! | C003   | Chemistry 101 | 3       |

use registrar_core::domain::{Course, Student};

use crate::roster_loader::Roster;

/// The sample roster described in the module docs.
pub fn sample_roster() -> Roster {
    Roster {
        students: vec![
            Student::new("S001", "John Doe", "john@example.com", 18),
            Student::new("S002", "Jane Smith", "jane@example.com", 12),
        ],
        courses: vec![
            Course::new("C001", "Math 101", 3),
            Course::new("C002", "Physics 101", 4),
            Course::new("C003", "Chemistry 101", 3),
        ],
    }
}
