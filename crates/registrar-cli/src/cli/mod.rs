//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "registrar",
    bin_name = "registrar",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Student enrollment and GPA tracking",
    long_about = "Registrar enrolls students in courses under a credit limit \
                  and computes credit-weighted GPAs. Every run starts from a \
                  roster of students and courses held in memory.",
    after_help = "EXAMPLES:\n\
        \x20 registrar enroll S001 C001 C002\n\
        \x20 registrar gpa S001 --grade C001=3.5 --grade C002=4.0\n\
        \x20 registrar --roster roster.toml run session.txt\n\
        \x20 registrar list courses --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Enroll a student in one or more courses.
    #[command(
        visible_alias = "e",
        about = "Enroll a student in courses",
        after_help = "EXAMPLES:\n\
            \x20 registrar enroll S001 C001\n\
            \x20 registrar enroll S002 C001 C002 C003"
    )]
    Enroll(EnrollArgs),

    /// Compute a student's GPA.
    #[command(
        about = "Show a student's GPA",
        after_help = "EXAMPLES:\n\
            \x20 registrar gpa S001\n\
            \x20 registrar gpa S001 --grade C001=3.5 --grade C002=4.0"
    )]
    Gpa(GpaArgs),

    /// Run a session script.
    #[command(
        about = "Run enroll/grade/gpa commands from a file",
        after_help = "SCRIPT FORMAT (one command per line, # starts a comment):\n\
            \x20 enroll S001 C001\n\
            \x20 grade  S001 C001 3.5\n\
            \x20 gpa    S001"
    )]
    Run(RunArgs),

    /// List roster records.
    #[command(
        visible_alias = "ls",
        about = "List students or courses",
        after_help = "EXAMPLES:\n\
            \x20 registrar list students\n\
            \x20 registrar list courses --format csv"
    )]
    List(ListArgs),

    /// Walk through the reference enrollment scenario.
    #[command(about = "Run the built-in demonstration scenario")]
    Demo,

    /// Initialise a Registrar configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 registrar init           # default location\n\
            \x20 registrar init --local   # .registrar.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 registrar completions bash > ~/.local/share/bash-completion/completions/registrar\n\
            \x20 registrar completions zsh  > ~/.zfunc/_registrar"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Registrar configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 registrar config get output.gpa_precision\n\
            \x20 registrar config list"
    )]
    Config(ConfigCommands),
}

// ── enroll ────────────────────────────────────────────────────────────────────

/// Arguments for `registrar enroll`.
#[derive(Debug, Args)]
pub struct EnrollArgs {
    #[arg(value_name = "STUDENT", help = "Student ID")]
    pub student: String,

    /// Courses to enroll in, attempted in order.
    #[arg(value_name = "COURSE", required = true, num_args = 1.., help = "Course ID(s)")]
    pub courses: Vec<String>,
}

// ── gpa ───────────────────────────────────────────────────────────────────────

/// Arguments for `registrar gpa`.
#[derive(Debug, Args)]
pub struct GpaArgs {
    #[arg(value_name = "STUDENT", help = "Student ID")]
    pub student: String,

    /// Enroll in COURSE and record GRADE before computing.
    #[arg(
        short = 'g',
        long = "grade",
        value_name = "COURSE=GRADE",
        value_parser = parse_grade_assignment,
        help = "Enroll and grade a course first (repeatable)"
    )]
    pub grades: Vec<(String, f64)>,
}

/// Parse `COURSE=GRADE`.
pub fn parse_grade_assignment(raw: &str) -> Result<(String, f64), String> {
    let (course, grade) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected COURSE=GRADE, got '{raw}'"))?;

    let course = course.trim();
    if course.is_empty() {
        return Err("course id is empty".into());
    }

    let grade: f64 = grade
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", grade.trim()))?;

    Ok((course.to_string(), grade))
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `registrar run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(value_name = "SCRIPT", help = "Session script to execute")]
    pub script: PathBuf,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `registrar list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// What to list.
    #[arg(value_enum, help = "Record type to list")]
    pub target: ListTarget,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Record type for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Students,
    Courses,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `registrar init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.registrar.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `registrar completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `registrar config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.gpa_precision`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
