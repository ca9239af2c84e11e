//! # Tools Module
//!
//! Locates and runs the external trestle program.

pub mod executor;
pub mod resolver;
