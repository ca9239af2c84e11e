//! # Execution Engine
//!
//! Runs one tool call as a single linear transaction:
//! build the argument vector, run the process, format the reply.
//! Holds no per-call state, so concurrent calls never contend.

use std::sync::Arc;

use crate::application::invocation::ToolInvocation;
use crate::domain::traits::ProcessRunner;
use crate::domain::types::ExecutionRequest;

#[derive(Clone)]
pub struct ExecutionEngine {
    runner: Arc<dyn ProcessRunner>,
}

impl ExecutionEngine {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, invocation: ToolInvocation) -> String {
        let tool = invocation.tool_name();
        let request = ExecutionRequest::new(invocation.build_args());

        tracing::info!(tool, args = ?request.args, "Running tool");
        let result = self.runner.run(request).await;

        if result.succeeded {
            tracing::info!(tool, "Tool succeeded");
        } else {
            tracing::warn!(tool, exit_code = result.exit_code, "Tool failed");
        }

        invocation.format_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ExecutionResult;
    use crate::interface::commands::import::ImportParams;
    use crate::interface::commands::init::InitParams;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every request and replies with a canned result.
    struct FakeRunner {
        reply: ExecutionResult,
        seen: Mutex<Vec<ExecutionRequest>>,
    }

    impl FakeRunner {
        fn new(reply: ExecutionResult) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeRunner {
        async fn run(&self, request: ExecutionRequest) -> ExecutionResult {
            self.seen.lock().unwrap().push(request);
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_passes_built_args_to_runner() {
        let runner =
            FakeRunner::new(ExecutionResult::completed(0, "ok".to_string(), String::new()));
        let engine = ExecutionEngine::new(runner.clone());

        let invocation = ToolInvocation::import(ImportParams {
            file: "cat.json".to_string(),
            output: "cat".to_string(),
            regenerate: true,
            ..Default::default()
        });
        let reply = engine.execute(invocation).await;

        let seen = runner.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].args,
            vec!["import", "-f", "cat.json", "-o", "cat", "--regenerate"]
        );
        assert!(seen[0].working_dir.is_none());
        assert!(seen[0].timeout.is_none());
        assert!(reply.starts_with("✅"));
        assert!(reply.contains("Output: cat"));
    }

    #[tokio::test]
    async fn test_failure_reply_carries_stderr() {
        let runner = FakeRunner::new(ExecutionResult::completed(
            1,
            String::new(),
            "Directory already initialized".to_string(),
        ));
        let engine = ExecutionEngine::new(runner);

        let reply = engine
            .execute(ToolInvocation::init(InitParams::default()))
            .await;
        assert!(reply.starts_with("❌"));
        assert!(reply.contains("Directory already initialized"));
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let runner = FakeRunner::new(ExecutionResult::completed(0, String::new(), String::new()));
        let engine = ExecutionEngine::new(runner.clone());

        let a = engine.execute(ToolInvocation::init(InitParams::default()));
        let b = engine.execute(ToolInvocation::init(InitParams::default()));
        let (a, b) = tokio::join!(a, b);

        assert_eq!(a, b);
        assert_eq!(runner.seen.lock().unwrap().len(), 2);
    }
}
