//! # Domain Layer
//!
//! Core definitions, types, and traits shared by every other layer.
//! Independent of the transport and of how processes are actually spawned.

pub mod config;
pub mod paths;
pub mod traits;
pub mod types;
