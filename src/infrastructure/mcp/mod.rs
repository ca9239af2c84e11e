//! # MCP Module
//!
//! Model Context Protocol server exposing the trestle tools over stdio.

pub mod server;

pub use server::TrestleServer;
