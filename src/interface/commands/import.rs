//! # Import Command
//!
//! `trestle import`: copies an OSCAL model (local path or URL) into the
//! workspace directory matching its model type.

use rmcp::schemars;
use serde::Deserialize;

use crate::domain::types::ExecutionResult;
use crate::interface::commands::{Argv, strip, strip_opt};
use crate::strings::messages;

pub const TOOL_NAME: &str = "trestle_import";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
pub struct ImportParams {
    /// OSCAL file to import - either file path or URL
    pub file: String,
    /// Name of output element
    pub output: String,
    /// Flag to force generation of new UUIDs in the model
    #[serde(default)]
    pub regenerate: bool,
    /// Path to trestle root directory
    #[serde(default)]
    pub trestle_root: Option<String>,
    /// Display verbose output
    #[serde(default)]
    pub verbose: bool,
}

impl ImportParams {
    pub fn normalize(self) -> Self {
        Self {
            file: strip(self.file),
            output: strip(self.output),
            trestle_root: strip_opt(self.trestle_root),
            ..self
        }
    }

    pub fn build_args(&self) -> Vec<String> {
        Argv::new(["import"])
            .value("-f", &self.file)
            .value("-o", &self.output)
            .flag("--regenerate", self.regenerate)
            .option("--trestle-root", self.trestle_root.as_deref())
            .flag("--verbose", self.verbose)
            .build()
    }

    pub fn format_result(&self, result: &ExecutionResult) -> String {
        if result.succeeded {
            messages::success_with_output(messages::IMPORT_SUCCESS, &self.output, &result.stdout)
        } else {
            messages::failure_with_context(
                messages::IMPORT_FAILURE,
                "File",
                &self.file,
                &result.stderr,
            )
        }
    }
}
