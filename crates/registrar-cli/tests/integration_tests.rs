//! Integration tests for the `registrar` binary.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const ROSTER: &str = r#"
[[students]]
id = "A1"
name = "Ada Lovelace"
email = "ada@example.com"
max_credits = 6

[[courses]]
id = "K1"
name = "Analytical Engines"
credits = 4

[[courses]]
id = "K2"
name = "Notes"
credits = 3
"#;

fn write(temp: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ── meta ──────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    cargo_bin_cmd!("registrar")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("enroll"))
        .stdout(predicate::str::contains("gpa"))
        .stdout(predicate::str::contains("--roster"));
}

#[test]
fn version_flag() {
    cargo_bin_cmd!("registrar")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    cargo_bin_cmd!("registrar").assert().code(2);
}

// ── enroll ────────────────────────────────────────────────────────────────────

#[test]
fn enroll_in_several_courses() {
    cargo_bin_cmd!("registrar")
        .args(["enroll", "S001", "C001", "C002"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESS: Student S001 enrolled in course C001",
        ))
        .stdout(predicate::str::contains(
            "SUCCESS: Student S001 enrolled in course C002",
        ));
}

#[test]
fn enroll_past_the_credit_limit_fails() {
    cargo_bin_cmd!("registrar")
        .args(["enroll", "S002", "C001", "C002", "C003", "C001"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "ERROR: Student exceeds maximum credit limit",
        ))
        .stderr(predicate::str::contains("1 of 4 requests failed"));
}

#[test]
fn enroll_unknown_student() {
    cargo_bin_cmd!("registrar")
        .args(["enroll", "S999", "C001"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "ERROR: Student not found with ID: S999",
        ));
}

#[test]
fn quiet_still_prints_results() {
    cargo_bin_cmd!("registrar")
        .args(["-q", "enroll", "S001", "C003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"));
}

// ── gpa ───────────────────────────────────────────────────────────────────────

#[test]
fn gpa_with_grades() {
    cargo_bin_cmd!("registrar")
        .args(["gpa", "S001", "--grade", "C001=3.5", "--grade", "C002=4.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESS: Grade 3.50 recorded for student S001 in course C001",
        ))
        .stdout(predicate::str::contains("GPA for student S001: 3.79"));
}

#[test]
fn gpa_without_enrollments_is_zero() {
    cargo_bin_cmd!("registrar")
        .args(["gpa", "S002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA for student S002: 0.00"));
}

#[test]
fn gpa_precision_from_environment() {
    cargo_bin_cmd!("registrar")
        .env("REGISTRAR__OUTPUT__GPA_PRECISION", "3")
        .args(["gpa", "S001", "-g", "C001=3.5", "-g", "C002=4.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA for student S001: 3.786"));
}

#[test]
fn oversized_gpa_precision_is_a_configuration_error() {
    cargo_bin_cmd!("registrar")
        .env("REGISTRAR__OUTPUT__GPA_PRECISION", "1000000000")
        .args(["gpa", "S001"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gpa_precision must be at most 17"));
}

#[test]
fn gpa_rejects_malformed_grade_flag() {
    cargo_bin_cmd!("registrar")
        .args(["gpa", "S001", "--grade", "C001"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("COURSE=GRADE"));
}

// ── run ───────────────────────────────────────────────────────────────────────

#[test]
fn run_executes_a_script() {
    let temp = TempDir::new().unwrap();
    let script = write(
        &temp,
        "session.txt",
        "# reference scenario\n\
         enroll S001 C001\n\
         enroll S001 C002\n\
         \n\
         grade S001 C001 3.5\n\
         grade S001 C002 4.0\n\
         gpa S001\n",
    );

    cargo_bin_cmd!("registrar")
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA for student S001: 3.79"));
}

#[test]
fn run_reports_the_bad_line() {
    let temp = TempDir::new().unwrap();
    let script = write(&temp, "bad.txt", "enroll S001 C001\ndrop S001 C001\n");

    cargo_bin_cmd!("registrar")
        .arg("run")
        .arg(&script)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("SUCCESS").not())
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn run_missing_script_is_internal_error() {
    cargo_bin_cmd!("registrar")
        .args(["run", "/no/such/script.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read script"));
}

// ── roster ────────────────────────────────────────────────────────────────────

#[test]
fn roster_file_replaces_the_sample() {
    let temp = TempDir::new().unwrap();
    let roster = write(&temp, "roster.toml", ROSTER);

    cargo_bin_cmd!("registrar")
        .arg("--roster")
        .arg(&roster)
        .args(["enroll", "A1", "K1", "K2"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "SUCCESS: Student A1 enrolled in course K1",
        ))
        .stdout(predicate::str::contains(
            "ERROR: Student exceeds maximum credit limit",
        ));
}

#[test]
fn roster_from_config_file() {
    let temp = TempDir::new().unwrap();
    let roster = write(&temp, "roster.toml", ROSTER);
    let config = write(
        &temp,
        "config.toml",
        &format!("[roster]\npath = {:?}\n", roster.display().to_string()),
    );

    cargo_bin_cmd!("registrar")
        .arg("--config")
        .arg(&config)
        .args(["list", "students", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A1,Ada Lovelace,ada@example.com,0,6",
        ));
}

#[test]
fn invalid_roster_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    let roster = write(
        &temp,
        "roster.toml",
        "[[courses]]\nid = \"C1\"\nname = \"x\"\ncredits = 0\n",
    );

    cargo_bin_cmd!("registrar")
        .arg("--roster")
        .arg(&roster)
        .args(["list", "courses"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Roster could not be loaded"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_courses_as_json() {
    let output = cargo_bin_cmd!("registrar")
        .args(["list", "courses", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let courses: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let courses = courses.as_array().unwrap();
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0]["id"], "C001");
    assert_eq!(courses[1]["credits"], 4);
}

#[test]
fn list_students_table() {
    cargo_bin_cmd!("registrar")
        .args(["list", "students"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Jane Smith"));
}

// ── demo ──────────────────────────────────────────────────────────────────────

#[test]
fn demo_runs_the_reference_scenario() {
    cargo_bin_cmd!("registrar")
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA for student S001: 3.79"))
        .stdout(predicate::str::contains(
            "ERROR: Student exceeds maximum credit limit",
        ));
}

// ── config / init / completions ───────────────────────────────────────────────

#[test]
fn config_get_reads_environment() {
    cargo_bin_cmd!("registrar")
        .env("REGISTRAR__OUTPUT__GPA_PRECISION", "5")
        .args(["config", "get", "output.gpa_precision"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.gpa_precision = 5"));
}

#[test]
fn config_get_unknown_key() {
    cargo_bin_cmd!("registrar")
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn explicit_missing_config_file_is_a_configuration_error() {
    cargo_bin_cmd!("registrar")
        .args(["--config", "/no/such/config.toml", "demo"])
        .assert()
        .code(4);
}

#[test]
fn init_local_writes_once() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("registrar")
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".registrar.toml")).unwrap();
    assert!(written.contains("gpa_precision = 2"));

    cargo_bin_cmd!("registrar")
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    cargo_bin_cmd!("registrar")
        .current_dir(temp.path())
        .args(["init", "--local", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    cargo_bin_cmd!("registrar")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("registrar"));
}
