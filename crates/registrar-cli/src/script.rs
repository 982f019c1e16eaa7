//! Session scripts for `registrar run`.
//!
//! One command per line:
//!
//! ```text
//! # comment
//! enroll S001 C001
//! grade  S001 C001 3.5
//! gpa    S001
//! ```
//!
//! The whole script is parsed before anything executes, so a malformed line
//! never leaves a half-applied session behind.

use crate::error::{CliError, CliResult};

/// A single parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Enroll { student: String, course: String },
    Grade { student: String, course: String, grade: f64 },
    Gpa { student: String },
}

/// Parse a script into `(line_number, command)` pairs. Line numbers are 1-based.
pub fn parse_script(source: &str) -> CliResult<Vec<(usize, ScriptCommand)>> {
    let mut commands = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let number = index + 1;
        let command = parse_line(line).map_err(|message| CliError::ScriptError {
            line: number,
            message,
        })?;
        commands.push((number, command));
    }

    Ok(commands)
}

fn parse_line(line: &str) -> Result<ScriptCommand, String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["enroll", student, course] => Ok(ScriptCommand::Enroll {
            student: (*student).to_owned(),
            course: (*course).to_owned(),
        }),
        ["grade", student, course, grade] => {
            let grade = grade
                .parse::<f64>()
                .map_err(|_| format!("'{grade}' is not a number"))?;
            Ok(ScriptCommand::Grade {
                student: (*student).to_owned(),
                course: (*course).to_owned(),
                grade,
            })
        }
        ["gpa", student] => Ok(ScriptCommand::Gpa {
            student: (*student).to_owned(),
        }),
        ["enroll", ..] => Err("usage: enroll <STUDENT> <COURSE>".into()),
        ["grade", ..] => Err("usage: grade <STUDENT> <COURSE> <GRADE>".into()),
        ["gpa", ..] => Err("usage: gpa <STUDENT>".into()),
        [other, ..] => Err(format!("unknown command '{other}'")),
        [] => Err("empty command".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "enroll S001 C001\ngrade S001 C001 3.5\ngpa S001\n";
        let commands = parse_script(script).unwrap();

        assert_eq!(
            commands,
            vec![
                (
                    1,
                    ScriptCommand::Enroll {
                        student: "S001".into(),
                        course: "C001".into()
                    }
                ),
                (
                    2,
                    ScriptCommand::Grade {
                        student: "S001".into(),
                        course: "C001".into(),
                        grade: 3.5
                    }
                ),
                (3, ScriptCommand::Gpa { student: "S001".into() }),
            ]
        );
    }

    #[test]
    fn blank_lines_and_comments_keep_line_numbers() {
        let script = "# setup\n\n   \nenroll S002 C003\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].0, 4);
    }

    #[test]
    fn extra_whitespace_is_fine() {
        let commands = parse_script("  grade\tS001   C002  4.0  ").unwrap();
        assert!(matches!(
            &commands[0].1,
            ScriptCommand::Grade { grade, .. } if *grade == 4.0
        ));
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_script("gpa S001\ndrop S001 C001\n").unwrap_err();
        match err {
            CliError::ScriptError { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("drop"));
            }
            other => panic!("expected ScriptError, got {other:?}"),
        }
    }

    #[test]
    fn wrong_arity_shows_usage() {
        let err = parse_script("enroll S001").unwrap_err();
        assert!(err.to_string().contains("usage: enroll"));
    }

    #[test]
    fn non_numeric_grade_is_rejected() {
        let err = parse_script("grade S001 C001 A+").unwrap_err();
        assert!(err.to_string().contains("'A+' is not a number"));
    }

    #[test]
    fn empty_script_is_empty() {
        assert!(parse_script("").unwrap().is_empty());
    }
}
