// ABOUTME: HTTP client for the Arvo API tool execution, discovery, and key validation endpoints
// ABOUTME: Maps HTTP status codes and transport failures onto AppError with readable messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! Arvo API Client
//!
//! One [`ArvoApiClient`] is built during startup and shared with the bridge.
//! Each method performs exactly one HTTP round trip; there are no retries
//! and no caching.
//!
//! ```rust,no_run
//! use arvo_mcp::config::ServerConfig;
//! use arvo_mcp::external::{ArvoApi, ArvoApiClient};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let client = ArvoApiClient::new(&config)?;
//! let profile = client.execute_tool("get_user_profile", &json!({})).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

use super::{ArvoApi, KeyValidation, RemoteToolDescriptor};
use crate::config::{ApiKey, ServerConfig};
use crate::constants::{endpoints, protocol};
use crate::errors::{describe_error_chain, AppError, AppResult};
use crate::logging::AppLogger;

#[derive(Debug, Serialize)]
struct ExecuteToolRequest<'a> {
    tool: &'a str,
    arguments: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ExecuteToolResponse {
    #[serde(default)]
    result: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ListToolsResponse {
    #[serde(default)]
    tools: Vec<RemoteToolDescriptor>,
}

/// Arvo API client
#[derive(Debug, Clone)]
pub struct ArvoApiClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl ArvoApiClient {
    /// Create a client from server configuration
    ///
    /// # Errors
    ///
    /// Returns an internal error if the HTTP client cannot be constructed
    pub fn new(config: &ServerConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(format!(
                "{}/{}",
                protocol::SERVER_NAME,
                protocol::SERVER_VERSION
            ))
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL every endpoint is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport_error(error: reqwest::Error) -> AppError {
        AppError::external_unavailable(describe_error_chain(&error)).with_source(error)
    }

    /// Best-effort extraction of `{"error": "..."}` from a failure body
    fn failure_message(status: StatusCode, body: &[u8]) -> String {
        serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16()))
    }
}

#[async_trait]
impl ArvoApi for ArvoApiClient {
    async fn execute_tool(&self, tool_name: &str, arguments: &Value) -> AppResult<Value> {
        let start = Instant::now();
        debug!(tool = %tool_name, "Forwarding tool call to Arvo API");

        let response = self
            .http_client
            .post(self.url(endpoints::MCP_TOOLS))
            .bearer_auth(self.api_key.expose())
            .json(&ExecuteToolRequest {
                tool: tool_name,
                arguments,
            })
            .send()
            .await;

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                AppLogger::log_api_request("POST", endpoints::MCP_TOOLS, None, elapsed_ms);
                return Err(Self::transport_error(e));
            }
        };

        let status = response.status();
        AppLogger::log_api_request(
            "POST",
            endpoints::MCP_TOOLS,
            Some(status.as_u16()),
            elapsed_ms,
        );

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(AppError::external_service(Self::failure_message(
                status, &body,
            )));
        }

        let body: ExecuteToolResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!(
                "Failed to parse Arvo API response: {}",
                describe_error_chain(&e)
            ))
        })?;

        Ok(body.result.unwrap_or(Value::Null))
    }

    async fn list_tools(&self) -> AppResult<Vec<RemoteToolDescriptor>> {
        let response = self
            .http_client
            .get(self.url(endpoints::MCP_TOOLS))
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Failed to fetch tools list: {}",
                status.as_u16()
            )));
        }

        let body: ListToolsResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!(
                "Failed to parse tools list: {}",
                describe_error_chain(&e)
            ))
        })?;
        Ok(body.tools)
    }

    async fn validate_key(&self) -> AppResult<KeyValidation> {
        let response = self
            .http_client
            .post(self.url(endpoints::VALIDATE_KEY))
            .bearer_auth(self.api_key.expose())
            .send()
            .await
            .map_err(Self::transport_error)?;

        // Rejections come back as non-2xx with a JSON body, so the status is not checked
        let status = response.status();
        response.json::<KeyValidation>().await.map_err(|e| {
            AppError::external_service(format!(
                "Unexpected key validation response (status {}): {}",
                status.as_u16(),
                describe_error_chain(&e)
            ))
        })
    }
}
