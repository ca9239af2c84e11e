//! # Executable Resolver
//!
//! Locates the trestle binary. Search order:
//! 1. `<cwd>/.venv/bin/<program>`
//! 2. `<install dir>/../../.venv/bin/<program>`
//! 3. the bare program name, left to `PATH`.

use std::path::PathBuf;

use crate::domain::config::TrestleConfig;
use crate::domain::paths::{install_venv_binary, venv_binary};

#[derive(Debug, Clone)]
pub struct ExecutableResolver {
    program: String,
    /// Used verbatim when set; no search is performed.
    explicit: Option<PathBuf>,
    cwd: Option<PathBuf>,
    install_dir: Option<PathBuf>,
}

impl ExecutableResolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            explicit: None,
            cwd: None,
            install_dir: None,
        }
    }

    /// Search bases taken from the running process.
    pub fn from_env(program: impl Into<String>) -> Self {
        let install_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()));

        Self::new(program)
            .with_cwd(std::env::current_dir().ok())
            .with_install_dir(install_dir)
    }

    pub fn from_config(config: &TrestleConfig) -> Self {
        Self::from_env(config.program.clone()).with_explicit(config.executable.clone())
    }

    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    pub fn with_install_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.install_dir = dir;
        self
    }

    /// Candidate `.venv` locations, in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(cwd) = &self.cwd {
            paths.push(venv_binary(cwd, &self.program));
        }
        if let Some(dir) = &self.install_dir {
            paths.push(install_venv_binary(dir, &self.program));
        }
        paths
    }

    /// Never fails: a missing binary surfaces later as a spawn error.
    pub fn resolve(&self) -> String {
        if let Some(path) = &self.explicit {
            return path.to_string_lossy().into_owned();
        }

        self.candidates()
            .into_iter()
            .find(|path| path.exists())
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.clone())
    }
}
