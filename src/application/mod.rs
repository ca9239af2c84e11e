//! # Application Layer
//!
//! Orchestration of a tool call: the invocation registry, the execution
//! engine, and logging setup.

pub mod engine;
pub mod invocation;
pub mod logging;
