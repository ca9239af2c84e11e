//! # Catalog Generate Command
//!
//! `trestle author catalog-generate`: splits a workspace catalog into
//! per-control markdown files.

use rmcp::schemars;
use serde::Deserialize;

use crate::domain::types::ExecutionResult;
use crate::interface::commands::{Argv, strip, strip_opt};
use crate::strings::messages;

pub const TOOL_NAME: &str = "trestle_author_catalog_generate";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, schemars::JsonSchema)]
pub struct CatalogGenerateParams {
    /// Name of the catalog model in the trestle workspace
    pub name: String,
    /// Name of the output generated catalog markdown folder
    pub output: String,
    /// Overwrite content of markdowns in output folder
    #[serde(default)]
    pub force_overwrite: bool,
    /// Path to the optional yaml header file
    #[serde(default)]
    pub yaml_header: Option<String>,
    /// Flag to overwrite values in markdown control header.
    #[serde(default)]
    pub overwrite_header_values: bool,
    /// Path to trestle root directory (default: current directory)
    #[serde(default)]
    pub trestle_root: Option<String>,
    /// Display verbose output
    #[serde(default)]
    pub verbose: bool,
}

impl CatalogGenerateParams {
    pub fn normalize(self) -> Self {
        Self {
            name: strip(self.name),
            output: strip(self.output),
            yaml_header: strip_opt(self.yaml_header),
            trestle_root: strip_opt(self.trestle_root),
            ..self
        }
    }

    pub fn build_args(&self) -> Vec<String> {
        Argv::new(["author", "catalog-generate"])
            .value("--name", &self.name)
            .value("--output", &self.output)
            .flag("--force-overwrite", self.force_overwrite)
            .option("--yaml-header", self.yaml_header.as_deref())
            .flag("--overwrite-header-values", self.overwrite_header_values)
            .option("--trestle-root", self.trestle_root.as_deref())
            .flag("--verbose", self.verbose)
            .build()
    }

    pub fn format_result(&self, result: &ExecutionResult) -> String {
        if result.succeeded {
            messages::success_with_output(
                messages::CATALOG_GENERATE_SUCCESS,
                &self.output,
                &result.stdout,
            )
        } else {
            messages::failure_with_context(
                messages::CATALOG_GENERATE_FAILURE,
                "Catalog",
                &self.name,
                &result.stderr,
            )
        }
    }
}
