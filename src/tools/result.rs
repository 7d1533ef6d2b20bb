// ABOUTME: Normalized outcome of a tool invocation, success text or structured error
// ABOUTME: Converts remote results and failures into the MCP tool response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! # Tool Result Types
//!
//! Every invocation ends in a [`ToolResult`], whatever happened on the
//! wire. Error payloads are serialized as `{"error": "<message>"}` text so
//! the host sees the same shape for every failure.

use serde_json::{json, Value};

use crate::mcp::schema::{Content, ToolResponse};

/// Result returned by a tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Text payload delivered to the host
    pub text: String,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Successful result from the remote `result` field.
    ///
    /// Strings pass through verbatim; any other value is pretty-printed.
    #[must_use]
    pub fn from_remote_value(value: &Value) -> Self {
        let text = match value {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        };
        Self {
            text,
            is_error: false,
        }
    }

    /// Create an error result carrying `{"error": message}`
    #[must_use]
    pub fn error(message: impl AsRef<str>) -> Self {
        Self {
            text: json!({ "error": message.as_ref() }).to_string(),
            is_error: true,
        }
    }

    /// Error result for a name missing from the registry
    #[must_use]
    pub fn unknown_tool(name: &str) -> Self {
        Self::error(format!("Unknown tool: {name}"))
    }

    /// The error message, if this is an error result
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        if !self.is_error {
            return None;
        }
        serde_json::from_str::<Value>(&self.text)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
    }

    /// MCP `tools/call` result envelope
    #[must_use]
    pub fn into_response(self) -> ToolResponse {
        ToolResponse {
            content: vec![Content::Text { text: self.text }],
            is_error: self.is_error,
        }
    }
}
