//! # Interface Layer
//!
//! Per-command parameter objects, argument builders and result formatters.

pub mod commands;
