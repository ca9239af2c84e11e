//! # Strings Module
//!
//! Centralizes user-facing strings and log lines.
//! Ensures consistency in messaging across all tools.

pub mod logs;
pub mod messages;
