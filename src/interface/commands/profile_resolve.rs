//! # Profile Resolve Command
//!
//! `trestle author profile-resolve`: resolves a profile into a
//! parameter-resolved catalog.

use rmcp::schemars;
use serde::Deserialize;

use crate::domain::types::ExecutionResult;
use crate::interface::commands::{Argv, strip, strip_opt};
use crate::strings::messages;

pub const TOOL_NAME: &str = "trestle_author_profile_resolve";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
pub struct ProfileResolveParams {
    /// Name of the source profile model in the trestle workspace.
    pub name: String,
    /// Name for the resolved profile catalog output.
    pub output: String,
    /// Show values for parameters in prose.
    #[serde(default)]
    pub show_values: Option<bool>,
    /// Show labels for parameters in prose.
    #[serde(default)]
    pub show_labels: Option<bool>,
    /// Bracket format to wrap value (e.g. [.] or ((.))).
    #[serde(default)]
    pub bracket_format: Option<String>,
    /// Prefix for parameter string if value assigned.
    #[serde(default)]
    pub value_assigned_prefix: Option<String>,
    /// Prefix for parameter string if value not assigned.
    #[serde(default)]
    pub value_not_assigned_prefix: Option<String>,
    /// Prefix for parameter label.
    #[serde(default)]
    pub label_prefix: Option<String>,
    /// Display verbose output.
    #[serde(default)]
    pub verbose: Option<bool>,
    /// Path to trestle root directory.
    #[serde(default)]
    pub trestle_root: Option<String>,
}

impl ProfileResolveParams {
    pub fn normalize(self) -> Self {
        Self {
            name: strip(self.name),
            output: strip(self.output),
            bracket_format: strip_opt(self.bracket_format),
            value_assigned_prefix: strip_opt(self.value_assigned_prefix),
            value_not_assigned_prefix: strip_opt(self.value_not_assigned_prefix),
            label_prefix: strip_opt(self.label_prefix),
            trestle_root: strip_opt(self.trestle_root),
            ..self
        }
    }

    pub fn build_args(&self) -> Vec<String> {
        Argv::new(["author", "profile-resolve"])
            .value("--name", &self.name)
            .value("-o", &self.output)
            .flag("--show-values", self.show_values.unwrap_or(false))
            .flag("--show-labels", self.show_labels.unwrap_or(false))
            .option("--bracket-format", self.bracket_format.as_deref())
            .option("--value-assigned-prefix", self.value_assigned_prefix.as_deref())
            .option(
                "--value-not-assigned-prefix",
                self.value_not_assigned_prefix.as_deref(),
            )
            .option("--label-prefix", self.label_prefix.as_deref())
            .flag("--verbose", self.verbose.unwrap_or(false))
            .option("--trestle-root", self.trestle_root.as_deref())
            .build()
    }

    pub fn format_result(&self, result: &ExecutionResult) -> String {
        if result.succeeded {
            messages::success_with_output(
                messages::PROFILE_RESOLVE_SUCCESS,
                &self.output,
                &result.stdout,
            )
        } else {
            messages::failure_with_context(
                messages::PROFILE_RESOLVE_FAILURE,
                "Profile",
                &self.name,
                &result.stderr,
            )
        }
    }
}
