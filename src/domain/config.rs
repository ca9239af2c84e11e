//! # Configuration
//!
//! Manages the loading and parsing of the server's configuration file (`config.yaml`).
//! Every section is optional; a missing key falls back to its default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::paths::PROGRAM_NAME;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Main configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub trestle: TrestleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the external program is located and run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TrestleConfig {
    /// Explicit executable path; skips the `.venv` search when set.
    #[serde(default)]
    pub executable: Option<PathBuf>,
    #[serde(default = "default_program")]
    pub program: String,
    /// Seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl TrestleConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for TrestleConfig {
    fn default() -> Self {
        Self {
            executable: None,
            program: default_program(),
            timeout: default_timeout(),
            working_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

fn default_program() -> String {
    PROGRAM_NAME.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_filter() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Loads `path`, or the default location when `None`.
    ///
    /// An explicitly requested file must exist. The default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
