//! # Command Handlers
//!
//! One module per trestle command. Each owns its parameter object, the pure
//! argument builder for it, and the formatter that turns an `ExecutionResult`
//! into the tool's reply.

pub mod catalog_generate;
pub mod import;
pub mod init;
pub mod profile_assemble;
pub mod profile_generate;
pub mod profile_resolve;

/// Strips surrounding whitespace from a string field.
pub(crate) fn strip(value: String) -> String {
    value.trim().to_string()
}

pub(crate) fn strip_opt(value: Option<String>) -> Option<String> {
    value.map(strip)
}

/// Ordered argument vector builder.
///
/// Value-bearing options push the flag then its value; boolean flags push
/// only the flag. Nothing is emitted for absent or empty options.
#[derive(Debug, Default)]
pub(crate) struct Argv(Vec<String>);

impl Argv {
    pub fn new<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self(tokens.into_iter().map(str::to_string).collect())
    }

    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.0.push(token.into());
        self
    }

    pub fn value(self, flag: &str, value: &str) -> Self {
        self.arg(flag).arg(value)
    }

    pub fn option(self, flag: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.value(flag, v),
            _ => self,
        }
    }

    pub fn flag(self, flag: &str, enabled: bool) -> Self {
        if enabled { self.arg(flag) } else { self }
    }

    pub fn build(self) -> Vec<String> {
        self.0
    }
}
