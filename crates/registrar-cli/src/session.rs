//! Wiring: fresh in-memory repositories, seeded from a roster, behind a
//! controller.
//!
//! Every CLI invocation builds its own [`Session`]; nothing outlives the
//! process.

use std::path::Path;

use tracing::{debug, instrument};

use registrar_adapters::{
    InMemoryCourseRepository, InMemoryEnrollmentRepository, InMemoryStudentRepository,
    RosterLoader, builtin_roster::sample_roster,
};
use registrar_core::{
    application::{CourseRepository, EnrollmentController, EnrollmentService, StudentRepository},
    domain::{Course, Student},
};

use crate::{error::CliResult, script::ScriptCommand};

/// An enrollment session over freshly seeded repositories.
pub struct Session {
    students: InMemoryStudentRepository,
    courses: InMemoryCourseRepository,
    controller: EnrollmentController,
    gpa_precision: usize,
}

impl Session {
    /// Seed from `roster` if given, otherwise from the built-in sample roster.
    #[instrument(skip_all, fields(roster = ?roster))]
    pub fn open(roster: Option<&Path>, gpa_precision: usize) -> CliResult<Self> {
        let roster = match roster {
            Some(path) => RosterLoader::new(path).load()?,
            None => {
                debug!("No roster configured; using the built-in sample roster");
                sample_roster()
            }
        };

        let students = InMemoryStudentRepository::new();
        let courses = InMemoryCourseRepository::new();
        roster.seed(&students, &courses)?;

        let service = EnrollmentService::new(
            Box::new(students.clone()),
            Box::new(courses.clone()),
            Box::new(InMemoryEnrollmentRepository::new()),
        );

        Ok(Self {
            students,
            courses,
            controller: EnrollmentController::new(service),
            gpa_precision,
        })
    }

    pub fn enroll(&self, student: &str, course: &str) -> String {
        self.controller.enroll_student(student, course)
    }

    pub fn grade(&self, student: &str, course: &str, grade: f64) -> String {
        self.controller.assign_grade(student, course, grade)
    }

    pub fn gpa(&self, student: &str) -> String {
        self.controller
            .student_gpa_with_precision(student, self.gpa_precision)
    }

    /// Run one script command and return the controller's response line.
    pub fn execute(&self, command: &ScriptCommand) -> String {
        match command {
            ScriptCommand::Enroll { student, course } => self.enroll(student, course),
            ScriptCommand::Grade {
                student,
                course,
                grade,
            } => self.grade(student, course, *grade),
            ScriptCommand::Gpa { student } => self.gpa(student),
        }
    }

    /// Students ordered by id, with their current credit load.
    pub fn students(&self) -> CliResult<Vec<Student>> {
        let mut students = self.students.find_all()?;
        students.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(students)
    }

    /// Courses ordered by id.
    pub fn courses(&self) -> CliResult<Vec<Course>> {
        let mut courses = self.courses.find_all()?;
        courses.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(courses)
    }
}

/// `true` for a controller line reporting a failure.
pub fn is_error_line(line: &str) -> bool {
    line.starts_with("ERROR")
}
