//! # Infrastructure Layer
//!
//! Handles interactions with external systems: the trestle process and the
//! MCP transport. Implements the traits defined in the Domain layer.

pub mod mcp;
pub mod tools;
