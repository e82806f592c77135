// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switchyard - a two-way query router.
//!
//! This is the binary entry point. It wires the routing model, the
//! enterprise-search client, and the two answering paths into a dispatcher,
//! then either serves it over HTTP or answers a single query from the
//! command line.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use switchyard_anthropic::AnthropicClient;
use switchyard_config::SwitchyardConfig;
use switchyard_core::{Query, SwitchyardError};
use switchyard_enterprise::EnterpriseSearchClient;
use switchyard_flow::{Dispatcher, ReasoningPath, RetrievalPath};
use switchyard_gateway::{GatewayState, ServerConfig};
use switchyard_router::QueryRouter;

/// Switchyard - a two-way query router.
#[derive(Parser, Debug)]
#[command(name = "switchyard", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway.
    Serve,
    /// Route and answer a single query, printing the result as JSON.
    Query {
        /// The query text.
        text: String,
    },
}

/// Wire clients and paths into a dispatcher from validated configuration.
fn build_dispatcher(config: &SwitchyardConfig) -> Result<Dispatcher, SwitchyardError> {
    let api_key = config.reasoning.api_key.as_deref().ok_or_else(|| {
        SwitchyardError::Config(
            "reasoning.api_key is not set (config file or SWITCHYARD_REASONING_API_KEY)"
                .to_string(),
        )
    })?;

    let model = AnthropicClient::new(
        api_key,
        &config.reasoning.api_version,
        config.reasoning.model.clone(),
        config.reasoning.max_tokens,
        config.reasoning.temperature,
    )?
    .with_base_url(config.reasoning.base_url.clone());
    let model = Arc::new(model);

    let search = Arc::new(EnterpriseSearchClient::new(
        config.enterprise.base_url.clone(),
        config.enterprise.application_id.clone(),
        config.enterprise.api_key.as_deref(),
    )?);

    Ok(Dispatcher::new(
        QueryRouter::new(model.clone()),
        RetrievalPath::new(search, &config.enterprise),
        ReasoningPath::new(model),
    ))
}

async fn run(cli: Cli, config: SwitchyardConfig) -> Result<(), SwitchyardError> {
    match cli.command {
        Some(Commands::Serve) => {
            let dispatcher = Arc::new(build_dispatcher(&config)?);
            let server_config = ServerConfig {
                host: config.gateway.host.clone(),
                port: config.gateway.port,
            };
            switchyard_gateway::start_server(&server_config, GatewayState::new(dispatcher)).await
        }
        Some(Commands::Query { text }) => {
            let query = Query::new(&text)?;
            let dispatcher = build_dispatcher(&config)?;
            let record = dispatcher.dispatch(&query).await?;
            let rendered = serde_json::to_string_pretty(&record)
                .map_err(|e| SwitchyardError::Internal(format!("failed to render record: {e}")))?;
            println!("{rendered}");
            Ok(())
        }
        None => {
            println!("switchyard: use --help for available commands");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration before anything else runs.
    let config = match switchyard_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            switchyard_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli, config).await {
        eprintln!("switchyard: {e}");
        std::process::exit(1);
    }
}
