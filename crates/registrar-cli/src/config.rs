//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--roster`, `--no-color`; applied at the call-site)
//! 2. Environment variables, e.g. `REGISTRAR__OUTPUT__GPA_PRECISION=3`
//! 3. Config file (`--config FILE` or [`AppConfig::config_path`])
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix shared by every environment override.
const ENV_PREFIX: &str = "REGISTRAR";

/// Largest accepted `output.gpa_precision`. An `f64` carries 17 significant digits.
pub const MAX_GPA_PRECISION: usize = 17;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where seed data comes from.
    pub roster: RosterConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Roster TOML file. `None` selects the built-in sample roster.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Decimal places used when printing a GPA. At most [`MAX_GPA_PRECISION`].
    pub gpa_precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            gpa_precision: 2,
        }
    }
}

impl AppConfig {
    /// File name used by `registrar init --local`.
    pub const LOCAL_FILE: &'static str = ".registrar.toml";

    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file
            .cloned()
            .unwrap_or_else(Self::config_path);

        Self::load_from(&path, config_file.is_some(), Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                env.prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        if config.output.gpa_precision > MAX_GPA_PRECISION {
            anyhow::bail!(
                "output.gpa_precision must be at most {MAX_GPA_PRECISION}, got {}",
                config.output.gpa_precision
            );
        }
        tracing::debug!(path = %path.display(), ?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.registrar.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "registrar", "registrar")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(Self::LOCAL_FILE))
    }

    /// Roster path after applying the `--roster` override.
    pub fn roster_path(&self, cli_override: Option<&PathBuf>) -> Option<PathBuf> {
        cli_override.or(self.roster.path.as_ref()).cloned()
    }
}
