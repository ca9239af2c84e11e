//! # Messages
//!
//! User-facing result strings returned by every tool.
//! The first character is always a success or failure marker.

use std::time::Duration;

pub const SUCCESS_MARKER: &str = "✅";
pub const FAILURE_MARKER: &str = "❌";

pub const INIT_SUCCESS: &str = "Trestle workspace initialized successfully";
pub const INIT_FAILURE: &str = "Failed to initialize trestle workspace";
pub const IMPORT_SUCCESS: &str = "OSCAL model imported successfully";
pub const IMPORT_FAILURE: &str = "Failed to import OSCAL model";
pub const CATALOG_GENERATE_SUCCESS: &str = "Catalog controls generated as markdown successfully";
pub const CATALOG_GENERATE_FAILURE: &str = "Failed to generate catalog markdowns";
pub const PROFILE_GENERATE_SUCCESS: &str = "Profile-based markdown controls generated successfully";
pub const PROFILE_GENERATE_FAILURE: &str = "Failed to generate profile-based markdowns";
pub const PROFILE_RESOLVE_SUCCESS: &str = "Resolved profile catalog generated successfully";
pub const PROFILE_RESOLVE_FAILURE: &str = "Failed to generate resolved profile catalog";
pub const PROFILE_ASSEMBLE_SUCCESS: &str = "Profile assembled from markdown successfully";
pub const PROFILE_ASSEMBLE_FAILURE: &str = "Failed to assemble profile from markdown";

/// `✅ {headline}\n\n{stdout}`
pub fn success(headline: &str, stdout: &str) -> String {
    format!("{SUCCESS_MARKER} {headline}\n\n{}", stdout.trim())
}

/// `✅ {headline}\n\nOutput: {output}\n\n{stdout}`
pub fn success_with_output(headline: &str, output: &str, stdout: &str) -> String {
    format!(
        "{SUCCESS_MARKER} {headline}\n\nOutput: {output}\n\n{}",
        stdout.trim()
    )
}

/// `❌ {headline}\n\nError: {stderr}`
pub fn failure(headline: &str, stderr: &str) -> String {
    format!("{FAILURE_MARKER} {headline}\n\nError: {}", stderr.trim())
}

/// `❌ {headline}\n\n{label}: {value}\nError: {stderr}`
pub fn failure_with_context(headline: &str, label: &str, value: &str, stderr: &str) -> String {
    format!(
        "{FAILURE_MARKER} {headline}\n\n{label}: {value}\nError: {}",
        stderr.trim()
    )
}

/// Sub-second limits keep their fraction.
pub fn command_timed_out(timeout: Duration) -> String {
    format!("Command timed out after {} seconds", timeout.as_secs_f64())
}

pub fn execution_error(err: &str) -> String {
    format!("Error executing trestle: {err}")
}
