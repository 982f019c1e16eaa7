//! `registrar gpa`: print a student's GPA, optionally after enrolling in and
//! grading some courses.

use tracing::{debug, instrument};

use crate::{
    cli::{GlobalArgs, GpaArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    session::is_error_line,
};

#[instrument(skip_all, fields(student = %args.student, grades = args.grades.len()))]
pub fn execute(
    args: GpaArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let session = super::open_session(&global, &config, &output)?;
    let mut lines = Vec::with_capacity(args.grades.len() * 2 + 1);

    for (course, grade) in &args.grades {
        debug!(course = %course, grade, "Applying --grade");
        let enrolled = session.enroll(&args.student, course);
        let rejected = is_error_line(&enrolled);
        lines.push(enrolled);
        if !rejected {
            lines.push(session.grade(&args.student, course, *grade));
        }
    }

    lines.push(session.gpa(&args.student));
    super::report(&lines, &output)
}
