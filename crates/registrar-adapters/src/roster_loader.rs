//! TOML roster loader.
//!
//! A roster is the seed data a session starts from: every student and course
//! known to the registrar. It is read once; nothing is ever written back.
//!
//! # Roster format
//!
//! ```toml
//! [[students]]
//! id          = "S001"
//! name        = "John Doe"
//! email       = "john@example.com"
//! max_credits = 18
//!
//! [[courses]]
//! id      = "C001"
//! name    = "Math 101"
//! credits = 3
//! ```
//!
//! Both sections are optional. Ids must be unique within their section.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info, instrument};

use registrar_core::{
    application::{
        ApplicationError,
        ports::{CourseRepository, StudentRepository},
    },
    domain::{Course, DomainValidator as validator, Student},
    error::{RegistrarError, RegistrarResult},
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a roster file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RosterManifest {
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
}

/// One entry under `[[students]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct StudentEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub max_credits: u32,
}

/// One entry under `[[courses]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct CourseEntry {
    pub id: String,
    pub name: String,
    pub credits: u32,
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Validated seed data, ready to be written into repositories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
}

impl Roster {
    /// Build a roster from a parsed manifest, validating every record.
    pub fn from_manifest(manifest: RosterManifest) -> RegistrarResult<Self> {
        Self::build(manifest).map_err(roster_error)
    }

    fn build(manifest: RosterManifest) -> Result<Self, String> {
        let mut seen = HashSet::new();
        let mut students = Vec::with_capacity(manifest.students.len());
        for entry in manifest.students {
            if !seen.insert(entry.id.clone()) {
                return Err(format!("duplicate student id '{}'", entry.id));
            }
            let student = Student::new(entry.id, entry.name, entry.email, entry.max_credits);
            validator::validate_student(&student).map_err(|e| e.to_string())?;
            students.push(student);
        }

        let mut seen = HashSet::new();
        let mut courses = Vec::with_capacity(manifest.courses.len());
        for entry in manifest.courses {
            if !seen.insert(entry.id.clone()) {
                return Err(format!("duplicate course id '{}'", entry.id));
            }
            let course = Course::new(entry.id, entry.name, entry.credits);
            validator::validate_course(&course).map_err(|e| e.to_string())?;
            courses.push(course);
        }

        Ok(Self { students, courses })
    }

    /// Save every student and course into the given repositories.
    #[instrument(skip_all, fields(students = self.students.len(), courses = self.courses.len()))]
    pub fn seed(
        &self,
        students: &dyn StudentRepository,
        courses: &dyn CourseRepository,
    ) -> RegistrarResult<()> {
        for student in &self.students {
            students.save(student.clone())?;
        }
        for course in &self.courses {
            courses.save(course.clone())?;
        }
        debug!("Roster seeded");
        Ok(())
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Reads a [`Roster`] from a TOML file.
///
/// # Example
///
/// ```no_run
/// use registrar_adapters::RosterLoader;
///
/// let roster = RosterLoader::new("./roster.toml").load()?;
/// println!("Loaded {} students", roster.students.len());
/// # Ok::<(), registrar_core::error::RegistrarError>(())
/// ```
pub struct RosterLoader {
    path: PathBuf,
}

impl RosterLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the roster file.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::RosterLoad`] if the file is missing,
    /// unreadable, not valid TOML, or contains an invalid record.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> RegistrarResult<Roster> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            roster_error(format!("failed to read '{}': {e}", self.path.display()))
        })?;

        let roster = Self::parse_str(&raw)
            .map_err(|reason| roster_error(format!("'{}': {reason}", self.path.display())))?;

        info!(
            students = roster.students.len(),
            courses = roster.courses.len(),
            "Roster loaded"
        );
        Ok(roster)
    }

    /// Parse roster TOML from a string.
    pub fn parse(raw: &str) -> RegistrarResult<Roster> {
        Self::parse_str(raw).map_err(roster_error)
    }

    fn parse_str(raw: &str) -> Result<Roster, String> {
        let manifest: RosterManifest =
            toml::from_str(raw).map_err(|e| format!("invalid roster: {e}"))?;
        Roster::build(manifest)
    }
}

fn roster_error(reason: String) -> RegistrarError {
    ApplicationError::RosterLoad { reason }.into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
