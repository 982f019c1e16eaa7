//! `registrar demo`: the reference scenario against the built-in roster.

use crate::{error::CliResult, output::OutputManager, session::Session};

/// Every step of the walkthrough, as `(heading, lines)`.
fn scenario(session: &Session) -> Vec<(&'static str, Vec<String>)> {
    vec![
        (
            "Enrolling S001 (max 18 credits)",
            vec![session.enroll("S001", "C001"), session.enroll("S001", "C002")],
        ),
        (
            "Recording grades",
            vec![
                session.grade("S001", "C001", 3.5),
                session.grade("S001", "C002", 4.0),
            ],
        ),
        ("Computing GPA", vec![session.gpa("S001")]),
        (
            "Enrolling S002 (max 12 credits) past the limit",
            vec![
                session.enroll("S002", "C001"),
                session.enroll("S002", "C002"),
                session.enroll("S002", "C003"),
                session.enroll("S002", "C001"),
            ],
        ),
    ]
}

/// Always uses the built-in roster so the outcome is fixed. The rejected
/// enrollment at the end is part of the scenario, not a failure.
pub fn execute(output: OutputManager) -> CliResult<()> {
    let session = Session::open(None, output.gpa_precision())?;

    for (heading, lines) in scenario(&session) {
        output.header(heading)?;
        for line in &lines {
            output.result(line)?;
        }
    }

    Ok(())
}
