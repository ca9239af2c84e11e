//! # Main Entry Point
//!
//! Starts the trestle MCP server:
//! - Domain: Configuration and Types
//! - Infrastructure: trestle process runner, MCP transport
//! - Application: Engine, Invocation registry, Logging
//! - Interface: Command argument builders and formatters
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::engine::ExecutionEngine;
use crate::domain::config::AppConfig;
use crate::infrastructure::mcp::TrestleServer;
use crate::infrastructure::tools::executor::CommandExecutor;
use crate::infrastructure::tools::resolver::ExecutableResolver;
use crate::strings::logs;

/// MCP server for the compliance-trestle OSCAL CLI.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Path to the YAML config file (default: data/config.yaml, optional)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Working directory for every trestle invocation
    #[arg(long)]
    working_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(file) = self.log_file {
            config.logging.file = Some(file);
        }
        if let Some(dir) = self.working_dir {
            config.trestle.working_dir = Some(dir);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config_source = cli
        .config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| domain::config::DEFAULT_CONFIG_PATH.to_string());
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    tracing::info!("{}", logs::STARTING);
    tracing::debug!("{}", logs::config_loaded(&config_source));

    // 3. Process Runner
    let resolver = ExecutableResolver::from_config(&config.trestle);
    tracing::info!("{}", logs::executable_resolved(&resolver.resolve()));

    let executor = CommandExecutor::new(resolver)
        .with_timeout(config.trestle.timeout())
        .with_working_dir(config.trestle.working_dir.clone());

    // 4. Serve
    let server = TrestleServer::new(ExecutionEngine::new(Arc::new(executor)));
    let service = server
        .serve(stdio())
        .await
        .context("Failed to start MCP stdio transport")?;
    tracing::info!("{}", logs::SERVING);

    service.waiting().await.context("MCP service terminated abnormally")?;
    tracing::info!("{}", logs::SHUTDOWN);

    Ok(())
}
