//! `registrar run`: execute a session script.

use std::fs;

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, RunArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    script::parse_script,
};

#[instrument(skip_all, fields(script = %args.script.display()))]
pub fn execute(
    args: RunArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let source = fs::read_to_string(&args.script)
        .with_cli_context(|| format!("Failed to read script '{}'", args.script.display()))?;

    let commands = parse_script(&source)?;
    info!(commands = commands.len(), "Script parsed");

    let session = super::open_session(&global, &config, &output)?;
    let lines: Vec<String> = commands
        .iter()
        .map(|(_, command)| session.execute(command))
        .collect();

    super::report(&lines, &output)
}
