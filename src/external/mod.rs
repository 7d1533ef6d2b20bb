// ABOUTME: External API clients used by the bridge
// ABOUTME: Defines the ArvoApi trait seam and its HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! External service clients
//!
//! The bridge talks to the Arvo API through the [`ArvoApi`] trait so the
//! invocation path can be exercised without a network.

/// HTTP client for the Arvo API
pub mod arvo_client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppResult;

pub use arvo_client::ArvoApiClient;

/// Outcome of `POST /api/v1/auth/validate-key`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValidation {
    /// Whether the credential is accepted
    #[serde(default)]
    pub valid: bool,
    /// Owner of the key
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Scopes granted to the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    /// Rejection reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Tool entry from the remote discovery endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteToolDescriptor {
    /// Tool name as the API knows it
    pub name: String,
    /// Description, empty when the API omits it
    #[serde(default)]
    pub description: String,
    /// Raw argument schema
    #[serde(rename = "inputSchema", default)]
    pub input_schema: Value,
    /// Remote read-only classification
    #[serde(rename = "readOnly", default)]
    pub read_only: bool,
}

/// Operations the bridge needs from the Arvo API
#[async_trait]
pub trait ArvoApi: Send + Sync {
    /// Execute one tool; returns the remote `result` value
    async fn execute_tool(&self, tool_name: &str, arguments: &Value) -> AppResult<Value>;

    /// Fetch the remote tool catalog (out-of-band discovery)
    async fn list_tools(&self) -> AppResult<Vec<RemoteToolDescriptor>>;

    /// Check the configured credential
    async fn validate_key(&self) -> AppResult<KeyValidation>;
}
