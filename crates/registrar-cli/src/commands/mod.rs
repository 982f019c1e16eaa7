//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on a [`Session`] and print
//! what comes back. No business rules live here.

pub mod completions;
pub mod config;
pub mod demo;
pub mod enroll;
pub mod gpa;
pub mod init;
pub mod list;
pub mod run;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    session::{Session, is_error_line},
};

/// Open a session from `--roster`, then `roster.path`, then the sample roster.
pub(crate) fn open_session(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Session> {
    let roster = config.roster_path(global.roster.as_ref());
    Session::open(roster.as_deref(), output.gpa_precision())
}

/// Print controller lines and fail if any of them reported an error.
pub(crate) fn report(lines: &[String], output: &OutputManager) -> CliResult<()> {
    for line in lines {
        output.result(line)?;
    }

    let failed = lines.iter().filter(|l| is_error_line(l)).count();
    if failed > 0 {
        return Err(CliError::RequestsFailed {
            failed,
            total: lines.len(),
        });
    }
    Ok(())
}
