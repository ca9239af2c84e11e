//! # Domain Traits
//!
//! Abstract interface for the external-process boundary.
//! The Infrastructure layer spawns real processes; tests plug in fakes.

use async_trait::async_trait;

use crate::domain::types::{ExecutionRequest, ExecutionResult};

/// Runs one request to completion.
///
/// Implementations never fail: every spawn error, timeout or non-zero exit is
/// folded into the returned `ExecutionResult`.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, request: ExecutionRequest) -> ExecutionResult;
}
