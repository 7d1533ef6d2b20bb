// ABOUTME: Startup validation, serving, and shutdown of the Arvo MCP bridge
// ABOUTME: Validates the credential once, then serves stdio until EOF or a termination signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! # Server Lifecycle
//!
//! Startup is linear with no retries: validate the credential, then serve.
//! Shutdown on SIGINT or SIGTERM is immediate and does not drain in-flight
//! work.

use std::sync::Arc;

use tracing::{error, info};

use super::bridge::Bridge;
use super::mcp_request_processor::McpRequestProcessor;
use super::transport_manager::StdioTransport;
use crate::constants::defaults::API_KEY_SETTINGS_URL;
use crate::errors::{AppError, AppResult};
use crate::external::{ArvoApi, KeyValidation};
use crate::tools::ToolRegistry;

/// Why the serving loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The host closed stdin
    InputClosed,
    /// SIGINT or SIGTERM arrived
    Signal(&'static str),
}

/// Check the credential against the remote API.
///
/// # Errors
///
/// Returns an `AuthInvalid` error if the key is rejected, the validation
/// response is unusable, or the API cannot be reached
pub async fn validate_credential(api: &dyn ArvoApi) -> AppResult<KeyValidation> {
    match api.validate_key().await {
        Ok(validation) if validation.valid => {
            info!(
                user_id = validation.user_id.as_deref().unwrap_or("unknown"),
                "API key validated successfully"
            );
            Ok(validation)
        }
        Ok(validation) => {
            let reason = validation
                .error
                .unwrap_or_else(|| "key was not accepted".to_owned());
            Err(AppError::auth_invalid(format!(
                "Invalid API key: {reason}. Get your API key from {API_KEY_SETTINGS_URL}"
            )))
        }
        Err(e) => Err(AppError::auth_invalid(format!(
            "Failed to validate API key: {}. Make sure ARVO_API_KEY is set and you have internet connectivity",
            e.message
        ))
        .with_source(e)),
    }
}

/// Resolves when SIGINT or SIGTERM is received
#[cfg(unix)]
pub async fn shutdown_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => "SIGINT",
                _ = sigterm.recv() => "SIGTERM",
            }
        }
        Err(e) => {
            error!("Failed to install SIGTERM handler: {}", e);
            wait_for_ctrl_c().await
        }
    }
}

/// Resolves when Ctrl-C is received
#[cfg(not(unix))]
pub async fn shutdown_signal() -> &'static str {
    wait_for_ctrl_c().await
}

async fn wait_for_ctrl_c() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for SIGINT: {}", e);
        std::future::pending::<()>().await;
    }
    "SIGINT"
}

/// Validate the credential, then serve stdio until EOF or a signal.
///
/// # Errors
///
/// Returns an error if credential validation fails or stdio breaks
pub async fn run(registry: ToolRegistry, api: Arc<dyn ArvoApi>) -> AppResult<ShutdownReason> {
    validate_credential(api.as_ref()).await?;

    let tool_count = registry.len();
    let bridge = Bridge::new(registry, api);
    let transport = StdioTransport::new(McpRequestProcessor::new(bridge));
    info!(tools = tool_count, "Server started on stdio");

    tokio::select! {
        result = transport.run_stdio() => {
            result?;
            Ok(ShutdownReason::InputClosed)
        }
        signal = shutdown_signal() => {
            info!(signal, "Shutting down");
            Ok(ShutdownReason::Signal(signal))
        }
    }
}
