//! # MCP Server
//!
//! Registers the trestle tools with `rmcp` and dispatches each call to the
//! execution engine. Command failures are ordinary replies starting with ❌;
//! only arguments that fail to deserialize surface as MCP errors.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::engine::ExecutionEngine;
use crate::application::invocation::ToolInvocation;
use crate::interface::commands::catalog_generate::CatalogGenerateParams;
use crate::interface::commands::import::ImportParams;
use crate::interface::commands::init::InitParams;
use crate::interface::commands::profile_assemble::ProfileAssembleParams;
use crate::interface::commands::profile_generate::ProfileGenerateParams;
use crate::interface::commands::profile_resolve::ProfileResolveParams;

pub const SERVER_NAME: &str = "trestle_mcp";

const INSTRUCTIONS: &str = "Tools to manage OSCAL models using the compliance-trestle CLI. \
Start with trestle_init, import models with trestle_import, then use the author tools \
to move between OSCAL JSON and markdown.";

/// Tool arguments arrive wrapped as `{"params": {...}}`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToolRequest<P> {
    pub params: P,
}

#[derive(Clone)]
pub struct TrestleServer {
    engine: Arc<ExecutionEngine>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TrestleServer {
    pub fn new(engine: ExecutionEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            tool_router: Self::tool_router(),
        }
    }

    async fn dispatch(&self, invocation: ToolInvocation) -> Result<CallToolResult, McpError> {
        let reply = self.engine.execute(invocation).await;
        Ok(CallToolResult::success(vec![Content::text(reply)]))
    }

    /// Initialize a trestle working directory.
    ///
    /// Initializes the current directory as a Trestle workspace, creating the
    /// directory structure for OSCAL model management (catalogs, profiles,
    /// component definitions, system security plans, assessment plans,
    /// assessment results and POA&Ms). Don't use when the workspace is already
    /// initialized.
    #[tool(
        name = "trestle_init",
        annotations(
            title = "Initialize Trestle Workspace",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn trestle_init(
        &self,
        Parameters(request): Parameters<ToolRequest<InitParams>>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(ToolInvocation::init(request.params)).await
    }

    /// Import an existing OSCAL model into the trestle workspace.
    ///
    /// Accepts a URL or a local file path. The model is stored by type:
    /// catalogs/{output}/catalog.json, profiles/{output}/profile.json,
    /// component-definitions/{output}/component-definition.json or
    /// system-security-plans/{output}/system-security-plan.json.
    #[tool(
        name = "trestle_import",
        annotations(
            title = "Import OSCAL Model",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    async fn trestle_import(
        &self,
        Parameters(request): Parameters<ToolRequest<ImportParams>>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(ToolInvocation::import(request.params)).await
    }

    /// Generate Catalog controls in markdown form from a catalog in the trestle workspace.
    #[tool(
        name = "trestle_author_catalog_generate",
        annotations(
            title = "Generate Catalog Markdown Controls",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    async fn trestle_author_catalog_generate(
        &self,
        Parameters(request): Parameters<ToolRequest<CatalogGenerateParams>>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(ToolInvocation::catalog_generate(request.params)).await
    }

    /// Generate markdown documentation for the controls defined in a profile.
    ///
    /// Reads profiles/<name>/profile.json and writes one markdown document per
    /// selected control, for reviews and organization-specific documentation.
    #[tool(
        name = "trestle_author_profile_generate",
        annotations(
            title = "Generate Profile Markdown Controls",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    async fn trestle_author_profile_generate(
        &self,
        Parameters(request): Parameters<ToolRequest<ProfileGenerateParams>>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(ToolInvocation::profile_generate(request.params)).await
    }

    /// Resolve an OSCAL profile to a resolved profile catalog.
    ///
    /// Turns profiles/<name>/profile.json into a parameter-resolved catalog,
    /// with options controlling how parameter values and labels appear in prose.
    #[tool(
        name = "trestle_author_profile_resolve",
        annotations(
            title = "Resolve Profile to Catalog",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    async fn trestle_author_profile_resolve(
        &self,
        Parameters(request): Parameters<ToolRequest<ProfileResolveParams>>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(ToolInvocation::profile_resolve(request.params)).await
    }

    /// Assemble markdown controls into a Profile JSON file.
    ///
    /// Builds profiles/<output_profile>/profile.json from a directory of
    /// profile markdown controls, optionally expanding parameters from the
    /// YAML frontmatter.
    #[tool(
        name = "trestle_author_profile_assemble",
        annotations(
            title = "Assemble Profile JSON from Markdown Directory",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    async fn trestle_author_profile_assemble(
        &self,
        Parameters(request): Parameters<ToolRequest<ProfileAssembleParams>>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(ToolInvocation::profile_assemble(request.params)).await
    }
}

#[tool_handler]
impl ServerHandler for TrestleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::ProcessRunner;
    use crate::domain::types::{ExecutionRequest, ExecutionResult};
    use crate::interface::commands;
    use async_trait::async_trait;

    struct EchoArgsRunner;

    #[async_trait]
    impl ProcessRunner for EchoArgsRunner {
        async fn run(&self, request: ExecutionRequest) -> ExecutionResult {
            ExecutionResult::completed(0, request.args.join(" "), String::new())
        }
    }

    struct RejectingRunner;

    #[async_trait]
    impl ProcessRunner for RejectingRunner {
        async fn run(&self, request: ExecutionRequest) -> ExecutionResult {
            let stderr = format!("Error: invalid arguments: {}", request.args.join(" "));
            ExecutionResult::completed(2, String::new(), stderr)
        }
    }

    fn server() -> TrestleServer {
        TrestleServer::new(ExecutionEngine::new(Arc::new(EchoArgsRunner)))
    }

    fn text(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_registers_all_tools() {
        let mut names: Vec<String> = server()
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();

        let mut expected = vec![
            commands::init::TOOL_NAME,
            commands::import::TOOL_NAME,
            commands::catalog_generate::TOOL_NAME,
            commands::profile_generate::TOOL_NAME,
            commands::profile_resolve::TOOL_NAME,
            commands::profile_assemble::TOOL_NAME,
        ];
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_init_is_the_only_idempotent_tool() {
        for tool in server().tool_router.list_all() {
            let annotations = tool.annotations.expect("annotations registered");
            let idempotent = annotations.idempotent_hint == Some(true);
            assert_eq!(idempotent, tool.name == commands::init::TOOL_NAME);
            assert_eq!(annotations.read_only_hint, Some(false));
            assert_eq!(annotations.destructive_hint, Some(false));
        }
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_request_wrapper_shape() {
        let request: ToolRequest<ImportParams> =
            serde_json::from_str(r#"{"params": {"file": "a.json", "output": "a"}}"#).unwrap();
        assert_eq!(request.params.file, "a.json");
        let unwrapped = serde_json::from_str::<ToolRequest<ImportParams>>(r#"{"file": "a.json"}"#);
        assert!(unwrapped.is_err());
    }

    #[tokio::test]
    async fn test_init_call_runs_engine() {
        let result = server()
            .trestle_init(Parameters(ToolRequest {
                params: InitParams::default(),
            }))
            .await
            .unwrap();
        assert_eq!(
            text(&result),
            "✅ Trestle workspace initialized successfully\n\ninit --local"
        );
    }

    #[tokio::test]
    async fn test_blank_required_param_reaches_trestle() {
        let server = TrestleServer::new(ExecutionEngine::new(Arc::new(RejectingRunner)));
        let result = server
            .trestle_import(Parameters(ToolRequest {
                params: ImportParams {
                    file: "a.json".to_string(),
                    output: "   ".to_string(),
                    ..Default::default()
                },
            }))
            .await
            .unwrap();

        let reply = text(&result);
        assert!(reply.starts_with("❌"));
        assert!(reply.contains("File: a.json"));
        assert!(reply.ends_with("import -f a.json -o"));
    }

    #[tokio::test]
    async fn test_null_optional_flag_calls_tool() {
        let request: ToolRequest<ProfileResolveParams> = serde_json::from_str(
            r#"{"params": {"name": "p", "output": "o", "show_values": null}}"#,
        )
        .unwrap();
        let result = server()
            .trestle_author_profile_resolve(Parameters(request))
            .await
            .unwrap();
        assert!(text(&result).ends_with("author profile-resolve --name p -o o"));
    }
}
