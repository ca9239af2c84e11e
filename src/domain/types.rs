//! # Domain Types
//!
//! The request and result records shared by the runner, the engine and the
//! command handlers.

use rmcp::schemars;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Exit code reported when the process never produced one
/// (spawn failure, timeout, killed by a signal).
pub const FAILURE_EXIT_CODE: i32 = -1;

/// One invocation of the external program.
///
/// `args` never includes the program name itself; the runner prepends the
/// resolved executable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl ExecutionRequest {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            ..Default::default()
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Uniform outcome of every execution, whatever the failure cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub succeeded: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    /// The process ran to completion and reported `exit_code`.
    pub fn completed(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            succeeded: exit_code == 0,
            exit_code,
            stdout,
            stderr,
        }
    }

    /// The process could not report an exit code.
    pub fn failed(stderr: String) -> Self {
        Self {
            succeeded: false,
            exit_code: FAILURE_EXIT_CODE,
            stdout: String::new(),
            stderr,
        }
    }
}

/// Trestle workspace initialization mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    /// Minimal local workspace
    #[default]
    Local,
    /// Full workspace including distributed model directories
    Full,
    /// Workspace with governance document directories
    Govdocs,
}

impl InitMode {
    pub fn flag(self) -> &'static str {
        match self {
            InitMode::Local => "--local",
            InitMode::Full => "--full",
            InitMode::Govdocs => "--govdocs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_success_tracks_exit_code() {
        let ok = ExecutionResult::completed(0, "out".to_string(), String::new());
        assert!(ok.succeeded);
        assert_eq!(ok.exit_code, 0);

        let bad = ExecutionResult::completed(2, String::new(), "boom".to_string());
        assert!(!bad.succeeded);
        assert_eq!(bad.exit_code, 2);
        assert_eq!(bad.stderr, "boom");
    }

    #[test]
    fn test_failed_uses_sentinel() {
        let result = ExecutionResult::failed("spawn error".to_string());
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, FAILURE_EXIT_CODE);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn test_init_mode_serde() {
        let mode: InitMode = serde_json::from_str("\"govdocs\"").unwrap();
        assert_eq!(mode, InitMode::Govdocs);
        assert_eq!(InitMode::default(), InitMode::Local);
        assert!(serde_json::from_str::<InitMode>("\"remote\"").is_err());
    }

    #[test]
    fn test_init_mode_flags_are_distinct() {
        assert_eq!(InitMode::Local.flag(), "--local");
        assert_eq!(InitMode::Full.flag(), "--full");
        assert_eq!(InitMode::Govdocs.flag(), "--govdocs");
    }

    #[test]
    fn test_request_builder() {
        let request = ExecutionRequest::new(vec!["init".to_string()])
            .with_working_dir("/tmp/ws")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(request.args, vec!["init"]);
        assert_eq!(request.working_dir, Some(PathBuf::from("/tmp/ws")));
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
    }
}
