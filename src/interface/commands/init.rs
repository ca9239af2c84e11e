//! # Init Command
//!
//! `trestle init`: initializes the working directory as a trestle workspace.

use rmcp::schemars;
use serde::Deserialize;

use crate::domain::types::{ExecutionResult, InitMode};
use crate::interface::commands::{Argv, strip_opt};
use crate::strings::messages;

pub const TOOL_NAME: &str = "trestle_init";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
pub struct InitParams {
    /// Initialization mode: 'local' (default), 'full', or 'govdocs'
    #[serde(default)]
    pub mode: InitMode,
    /// Path to trestle root directory (default: current directory)
    #[serde(default)]
    pub trestle_root: Option<String>,
    /// Display verbose output
    #[serde(default)]
    pub verbose: bool,
}

impl InitParams {
    pub fn normalize(self) -> Self {
        Self {
            trestle_root: strip_opt(self.trestle_root),
            ..self
        }
    }

    pub fn build_args(&self) -> Vec<String> {
        Argv::new(["init"])
            .arg(self.mode.flag())
            .option("--trestle-root", self.trestle_root.as_deref())
            .flag("--verbose", self.verbose)
            .build()
    }

    pub fn format_result(&self, result: &ExecutionResult) -> String {
        if result.succeeded {
            messages::success(messages::INIT_SUCCESS, &result.stdout)
        } else {
            messages::failure(messages::INIT_FAILURE, &result.stderr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local() {
        assert_eq!(InitParams::default().build_args(), vec!["init", "--local"]);
    }

    #[test]
    fn test_full_mode() {
        let params = InitParams {
            mode: InitMode::Full,
            ..Default::default()
        };
        let args = params.build_args();
        assert!(args.contains(&"--full".to_string()));
        assert!(!args.contains(&"--local".to_string()));
    }

    #[test]
    fn test_exactly_one_mode_flag() {
        for mode in [InitMode::Local, InitMode::Full, InitMode::Govdocs] {
            let args = InitParams {
                mode,
                ..Default::default()
            }
            .build_args();
            let mode_flags = args
                .iter()
                .filter(|a| ["--local", "--full", "--govdocs"].contains(&a.as_str()))
                .count();
            assert_eq!(mode_flags, 1);
        }
    }

    #[test]
    fn test_all_options() {
        let params = InitParams {
            mode: InitMode::Govdocs,
            trestle_root: Some("/custom/path".to_string()),
            verbose: true,
        };
        assert_eq!(
            params.build_args(),
            vec!["init", "--govdocs", "--trestle-root", "/custom/path", "--verbose"]
        );
    }

    #[test]
    fn test_deserialize_empty_object() {
        let params: InitParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, InitParams::default());
    }

    #[test]
    fn test_blank_root_is_dropped() {
        let params = InitParams {
            trestle_root: Some("  ".to_string()),
            ..Default::default()
        }
        .normalize();
        assert_eq!(params.build_args(), vec!["init", "--local"]);
    }

    #[test]
    fn test_format_failure() {
        let result = ExecutionResult::completed(
            1,
            String::new(),
            "Directory already initialized\n".to_string(),
        );
        let msg = InitParams::default().format_result(&result);
        assert!(msg.starts_with("❌"));
        assert!(msg.contains("Failed"));
        assert!(msg.contains("already initialized"));
    }

    #[test]
    fn test_format_success() {
        let result = ExecutionResult::completed(
            0,
            "Initialized trestle project\n".to_string(),
            String::new(),
        );
        let msg = InitParams::default().format_result(&result);
        assert_eq!(
            msg,
            "✅ Trestle workspace initialized successfully\n\nInitialized trestle project"
        );
    }
}
