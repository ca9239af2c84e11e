//! # Command Executor
//!
//! Spawns the external program with a discrete argument vector (no shell),
//! captures both output streams and enforces a wall-clock timeout.
//! Every failure is folded into an `ExecutionResult`.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::domain::config::DEFAULT_TIMEOUT;
use crate::domain::traits::ProcessRunner;
use crate::domain::types::{ExecutionRequest, ExecutionResult, FAILURE_EXIT_CODE};
use crate::infrastructure::tools::resolver::ExecutableResolver;
use crate::strings::messages;

#[derive(Debug, Clone)]
pub struct CommandExecutor {
    resolver: ExecutableResolver,
    timeout: Duration,
    /// Falls back to the server's own cwd when unset.
    working_dir: Option<PathBuf>,
}

impl CommandExecutor {
    pub fn new(resolver: ExecutableResolver) -> Self {
        Self {
            resolver,
            timeout: DEFAULT_TIMEOUT,
            working_dir: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }
}

#[async_trait]
impl ProcessRunner for CommandExecutor {
    async fn run(&self, request: ExecutionRequest) -> ExecutionResult {
        let executable = self.resolver.resolve();
        let timeout = request.timeout.unwrap_or(self.timeout);

        let mut cmd = Command::new(&executable);
        cmd.args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = request.working_dir.as_ref().or(self.working_dir.as_ref()) {
            cmd.current_dir(dir);
        }

        tracing::debug!(executable = %executable, args = ?request.args, "Spawning command");

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(executable = %executable, error = %e, "Failed to spawn command");
                return ExecutionResult::failed(messages::execution_error(&e.to_string()));
            }
        };

        let mut stdout = child.stdout.take();
        let mut stderr = child.stderr.take();

        // Both pipes are drained while waiting so a chatty child cannot block on a full pipe.
        let outcome = tokio::time::timeout(timeout, async {
            tokio::try_join!(child.wait(), drain(&mut stdout), drain(&mut stderr))
        })
        .await;

        match outcome {
            Ok(Ok((status, out, err))) => {
                let exit_code = status.code().unwrap_or(FAILURE_EXIT_CODE);
                tracing::info!(executable = %executable, exit_code, "Command finished");
                ExecutionResult::completed(
                    exit_code,
                    String::from_utf8_lossy(&out).into_owned(),
                    String::from_utf8_lossy(&err).into_owned(),
                )
            }
            Ok(Err(e)) => {
                let _ = child.kill().await;
                tracing::warn!(executable = %executable, error = %e, "Command execution failed");
                ExecutionResult::failed(messages::execution_error(&e.to_string()))
            }
            Err(_) => {
                // kill() also reaps the child.
                let _ = child.kill().await;
                tracing::warn!(
                    executable = %executable,
                    timeout_secs = timeout.as_secs_f64(),
                    "Command timed out"
                );
                ExecutionResult::failed(messages::command_timed_out(timeout))
            }
        }
    }
}

async fn drain<R: AsyncRead + Unpin>(pipe: &mut Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(pipe) = pipe.as_mut() {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}
