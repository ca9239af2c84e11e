use std::path::Path;

pub const STARTING: &str = "Starting trestle MCP server...";
pub const SERVING: &str = "Serving tools over stdio";
pub const SHUTDOWN: &str = "Shutting down...";

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn executable_resolved(path: &str) -> String {
    format!("Resolved trestle executable: {path}")
}

pub fn log_dir_create_fail(dir: &Path) -> String {
    format!("Failed to create log directory {}", dir.display())
}
