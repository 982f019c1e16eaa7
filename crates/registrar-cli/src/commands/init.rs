//! `registrar init`: create a default configuration file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration to the platform config dir, or to
/// `.registrar.toml` in the current directory with `--local`.
#[instrument(skip_all, fields(local = args.local, force = args.force))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.local {
        PathBuf::from(AppConfig::LOCAL_FILE)
    } else {
        AppConfig::config_path()
    };

    if args.force && config_path.exists() {
        output.warning(&format!(
            "Overwriting existing configuration at {}",
            config_path.display()
        ))?;
    }
    write_default(&config_path, args.force)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    Ok(())
}

fn write_default(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_a_loadable_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        write_default(&path, false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "# mine\n").unwrap();

        let err = write_default(&path, false).unwrap_err();
        assert!(matches!(err, CliError::ConfigExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("gpa_precision"));
    }
}
