//! # Profile Assemble Command
//!
//! `trestle author profile-assemble`: builds `profiles/<output>/profile.json`
//! from a directory of profile markdown controls.

use rmcp::schemars;
use serde::Deserialize;

use crate::domain::types::ExecutionResult;
use crate::interface::commands::{Argv, strip, strip_opt};
use crate::strings::messages;

pub const TOOL_NAME: &str = "trestle_author_profile_assemble";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
pub struct ProfileAssembleParams {
    /// Directory containing the profile markdown controls.
    pub markdown_dir: String,
    /// Output profile directory name (profiles/<output_profile>/profile.json)
    pub output_profile: String,
    /// Profile model name (optional)
    #[serde(default)]
    pub name: Option<String>,
    /// Expand parameters in frontmatter (optional)
    #[serde(default)]
    pub set_parameters: bool,
    /// Force UUID regeneration (optional)
    #[serde(default)]
    pub regenerate: bool,
    /// Profile version (optional)
    #[serde(default)]
    pub version: Option<String>,
    /// Sections short:long comma-separated (optional)
    #[serde(default)]
    pub sections: Option<String>,
    /// Required section short names, comma-separated
    #[serde(default)]
    pub required_sections: Option<String>,
    /// Allowed section short names, comma-separated
    #[serde(default)]
    pub allowed_sections: Option<String>,
    /// Verbose output
    #[serde(default)]
    pub verbose: bool,
    /// Path to trestle root dir
    #[serde(default)]
    pub trestle_root: Option<String>,
}

impl ProfileAssembleParams {
    pub fn normalize(self) -> Self {
        Self {
            markdown_dir: strip(self.markdown_dir),
            output_profile: strip(self.output_profile),
            name: strip_opt(self.name),
            version: strip_opt(self.version),
            sections: strip_opt(self.sections),
            required_sections: strip_opt(self.required_sections),
            allowed_sections: strip_opt(self.allowed_sections),
            trestle_root: strip_opt(self.trestle_root),
            ..self
        }
    }

    /// `--name` is optional but comes before `--markdown`/`--output`.
    /// Unlike the other commands, an empty markdown dir or output is left out.
    pub fn build_args(&self) -> Vec<String> {
        Argv::new(["author", "profile-assemble"])
            .option("--name", self.name.as_deref())
            .option("--markdown", Some(self.markdown_dir.as_str()))
            .option("--output", Some(self.output_profile.as_str()))
            .flag("--set-parameters", self.set_parameters)
            .flag("--regenerate", self.regenerate)
            .option("--version", self.version.as_deref())
            .option("--sections", self.sections.as_deref())
            .option("--required-sections", self.required_sections.as_deref())
            .option("--allowed-sections", self.allowed_sections.as_deref())
            .flag("--verbose", self.verbose)
            .option("--trestle-root", self.trestle_root.as_deref())
            .build()
    }

    pub fn format_result(&self, result: &ExecutionResult) -> String {
        if result.succeeded {
            messages::success_with_output(
                messages::PROFILE_ASSEMBLE_SUCCESS,
                &self.output_profile,
                &result.stdout,
            )
        } else {
            messages::failure_with_context(
                messages::PROFILE_ASSEMBLE_FAILURE,
                "MarkdownDir",
                &self.markdown_dir,
                &result.stderr,
            )
        }
    }
}
