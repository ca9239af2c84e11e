//! # Profile Generate Command
//!
//! `trestle author profile-generate`: writes markdown documents for the
//! controls selected by a workspace profile.

use rmcp::schemars;
use serde::Deserialize;

use crate::domain::types::ExecutionResult;
use crate::interface::commands::Argv;
use crate::strings::messages;

pub const TOOL_NAME: &str = "trestle_author_profile_generate";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
pub struct ProfileGenerateParams {
    /// Profile name to transform (profiles/<name>/profile.json)
    pub name: String,
    /// Output directory for generated markdown
    pub output: String,
    /// YAML to insert as markdown header (optional)
    #[serde(default)]
    pub yaml_header: Option<String>,
    /// Overwrite all markdown files in output directory
    #[serde(default)]
    pub force_overwrite: bool,
    /// Overwrite only YAML header values in markdown controls
    #[serde(default)]
    pub overwrite_header_values: bool,
    /// Sections to split in each control markdown file (comma-separated)
    #[serde(default)]
    pub sections: Option<String>,
    /// Comma-separated section short names required in the output
    #[serde(default)]
    pub required_sections: Option<String>,
    /// Path to trestle workspace root
    #[serde(default)]
    pub trestle_root: Option<String>,
    /// Display verbose output
    #[serde(default)]
    pub verbose: bool,
}

impl ProfileGenerateParams {
    pub fn build_args(&self) -> Vec<String> {
        Argv::new(["author", "profile-generate"])
            .value("-n", &self.name)
            .value("--output", &self.output)
            .option("--yaml-header", self.yaml_header.as_deref())
            .flag("--force-overwrite", self.force_overwrite)
            .flag("--overwrite-header-values", self.overwrite_header_values)
            .option("--sections", self.sections.as_deref())
            .option("--required-sections", self.required_sections.as_deref())
            .option("--trestle-root", self.trestle_root.as_deref())
            .flag("--verbose", self.verbose)
            .build()
    }

    pub fn format_result(&self, result: &ExecutionResult) -> String {
        if result.succeeded {
            messages::success_with_output(
                messages::PROFILE_GENERATE_SUCCESS,
                &self.output,
                &result.stdout,
            )
        } else {
            messages::failure_with_context(
                messages::PROFILE_GENERATE_FAILURE,
                "Profile",
                &self.name,
                &result.stderr,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ProfileGenerateParams {
        ProfileGenerateParams {
            name: "test".to_string(),
            output: "md_profile".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_only_uses_short_name_flag() {
        assert_eq!(
            params().build_args(),
            vec!["author", "profile-generate", "-n", "test", "--output", "md_profile"]
        );
    }

    #[test]
    fn test_all_options_in_order() {
        let params = ProfileGenerateParams {
            yaml_header: Some("h.yaml".to_string()),
            force_overwrite: true,
            overwrite_header_values: true,
            sections: Some("ImplGuidance:Implementation Guidance".to_string()),
            required_sections: Some("ImplGuidance".to_string()),
            trestle_root: Some("/ws".to_string()),
            verbose: true,
            ..params()
        };
        assert_eq!(
            &params.build_args()[6..],
            [
                "--yaml-header",
                "h.yaml",
                "--force-overwrite",
                "--overwrite-header-values",
                "--sections",
                "ImplGuidance:Implementation Guidance",
                "--required-sections",
                "ImplGuidance",
                "--trestle-root",
                "/ws",
                "--verbose"
            ]
        );
    }

    #[test]
    fn test_sections_alone() {
        let params = ProfileGenerateParams {
            sections: Some("a:A,b:B".to_string()),
            ..params()
        };
        assert_eq!(&params.build_args()[6..], ["--sections", "a:A,b:B"]);
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let params = ProfileGenerateParams {
            name: " test ".to_string(),
            sections: Some(" ".to_string()),
            trestle_root: Some(String::new()),
            ..params()
        };
        assert_eq!(
            params.build_args(),
            vec![
                "author",
                "profile-generate",
                "-n",
                " test ",
                "--output",
                "md_profile",
                "--sections",
                " "
            ]
        );
    }

    #[test]
    fn test_format() {
        let ok = ExecutionResult::completed(0, "done".to_string(), String::new());
        let msg = params().format_result(&ok);
        assert!(msg.starts_with("✅ Profile-based markdown controls generated"));
        assert!(msg.contains("Output: md_profile"));

        let bad = ExecutionResult::completed(2, String::new(), "Profile missing".to_string());
        let msg = params().format_result(&bad);
        assert!(msg.starts_with("❌"));
        assert!(msg.contains("Profile: test"));
        assert!(msg.contains("Profile missing"));
    }
}
