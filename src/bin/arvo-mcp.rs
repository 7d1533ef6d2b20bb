// ABOUTME: Arvo MCP server binary exposing the Arvo coaching tools to MCP hosts over stdio
// ABOUTME: Loads configuration, validates the API key, then serves until EOF or a signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! # Arvo MCP Server Binary
//!
//! Usage: `ARVO_API_KEY=arvo_xxx arvo-mcp`
//!
//! Exit status is 0 when the host closes stdin or a termination signal
//! arrives, and 1 when configuration or credential validation fails.

use std::collections::BTreeSet;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use arvo_mcp::{
    config::ServerConfig,
    external::{ArvoApi, ArvoApiClient},
    logging,
    mcp::{server_lifecycle, ShutdownReason},
    tools::ToolRegistry,
};
use clap::Parser;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "arvo-mcp")]
#[command(version)]
#[command(about = "Arvo MCP Server - AI workout coach tools for MCP clients")]
pub struct Args {
    /// Override the Arvo API base URL (defaults to ARVO_API_URL or https://arvo.guru)
    #[arg(long)]
    api_url: Option<String>,

    /// Print the remote tool catalog as JSON and exit
    #[arg(long)]
    list_remote_tools: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_from_env() {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            return ExitCode::from(1);
        }
    };

    let outcome = runtime.block_on(run(args));
    // A pending stdin read holds a blocking-pool thread until the host closes
    // the pipe, so a normal runtime drop would hang after a signal
    runtime.shutdown_background();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(api_url) = args.api_url.as_deref() {
        config = config
            .with_api_base_url(api_url)
            .context("Invalid --api-url")?;
    }
    info!("{}", config.summary());

    let client = Arc::new(ArvoApiClient::new(&config)?);
    let registry = ToolRegistry::builtin();

    if args.list_remote_tools {
        return list_remote_tools(client.as_ref(), &registry).await;
    }

    match server_lifecycle::run(registry, client).await? {
        ShutdownReason::InputClosed => info!("Host closed stdin, exiting"),
        ShutdownReason::Signal(signal) => info!(signal, "Exiting on signal"),
    }
    Ok(())
}

/// Print the remote catalog and report drift from the static registry
async fn list_remote_tools(api: &dyn ArvoApi, registry: &ToolRegistry) -> Result<()> {
    let remote = api
        .list_tools()
        .await
        .context("Failed to fetch remote tool catalog")?;

    let remote_names: BTreeSet<&str> = remote.iter().map(|t| t.name.as_str()).collect();
    let local_names: BTreeSet<&str> = registry.names().collect();

    for name in remote_names.difference(&local_names) {
        warn!(tool = %name, "Remote tool is not in the static registry");
    }
    for name in local_names.difference(&remote_names) {
        warn!(tool = %name, "Static tool is not offered by the remote API");
    }
    info!(
        remote = remote.len(),
        local = registry.len(),
        "Fetched remote tool catalog"
    );

    println!("{}", serde_json::to_string_pretty(&remote)?);
    Ok(())
}
