//! `registrar enroll`: enroll one student in each listed course.

use tracing::instrument;

use crate::{
    cli::{EnrollArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Courses are attempted in order; a rejection does not stop later ones.
#[instrument(skip_all, fields(student = %args.student, courses = args.courses.len()))]
pub fn execute(
    args: EnrollArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let session = super::open_session(&global, &config, &output)?;

    let lines: Vec<String> = args
        .courses
        .iter()
        .map(|course| session.enroll(&args.student, course))
        .collect();

    super::report(&lines, &output)
}
