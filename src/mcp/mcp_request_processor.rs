// ABOUTME: MCP request processing and protocol handling for the Arvo bridge
// ABOUTME: Validates, routes, and executes JSON-RPC requests with proper error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, warn};

use super::bridge::Bridge;
use super::schema::{InitializeResponse, ToolCall, ToolSchema};
use crate::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_REQUEST, ERROR_METHOD_NOT_FOUND,
};
use crate::constants::protocol::{
    JSONRPC_VERSION, MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION,
};
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use crate::tools::ToolDescriptor;

/// Processes MCP protocol requests with validation, routing, and execution
#[derive(Clone)]
pub struct McpRequestProcessor {
    bridge: Bridge,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    /// Handle an MCP request; notifications produce no response
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        debug!(method = %request.method, id = ?request.id, "Received MCP request");

        if request.is_notification() {
            debug!(method = %request.method, "Handled notification");
            return None;
        }

        let response = self.process_request(request).await;
        debug!(
            duration_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Completed MCP request"
        );
        Some(response)
    }

    async fn process_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        if let Err(e) = Self::validate_request(&request) {
            warn!("Invalid MCP request: {}", e.message);
            return JsonRpcResponse::error(request.id, ERROR_INVALID_REQUEST, e.message);
        }

        match request.method.as_str() {
            "initialize" => Self::handle_initialize(request),
            "ping" => Self::handle_ping(request),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            _ => Self::handle_unknown_method(request),
        }
    }

    /// Validate MCP request format and required fields
    fn validate_request(request: &JsonRpcRequest) -> AppResult<()> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(AppError::invalid_input(format!(
                "Invalid JSON-RPC version: got '{}', expected '{}'",
                request.jsonrpc, JSONRPC_VERSION
            )));
        }

        if request.method.is_empty() {
            return Err(AppError::invalid_input("Missing method"));
        }

        Ok(())
    }

    fn handle_initialize(request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling initialize request");
        let init = InitializeResponse::new(MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION);
        Self::serialize_result(request.id, &init)
    }

    fn handle_ping(request: JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(request.id, json!({}))
    }

    fn handle_tools_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling tools/list request");
        let tools: Vec<ToolSchema> = self
            .bridge
            .handle_list_tools()
            .iter()
            .map(ToolDescriptor::to_schema)
            .collect();
        JsonRpcResponse::success(request.id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let call = match Self::parse_tool_call(request.params) {
            Ok(call) => call,
            Err(e) => {
                warn!("Rejected tools/call: {}", e.message);
                return JsonRpcResponse::error(
                    request.id,
                    e.code.jsonrpc_code(),
                    format!("Invalid params: {}", e.message),
                );
            }
        };

        debug!(tool = %call.name, "Handling tools/call request");
        let arguments = call.arguments.filter(|args| !args.is_null());
        let result = self.bridge.handle_invoke(&call.name, arguments).await;
        Self::serialize_result(request.id, &result.into_response())
    }

    fn parse_tool_call(params: Option<Value>) -> AppResult<ToolCall> {
        let params = params.ok_or_else(|| AppError::invalid_input("missing params"))?;
        let call: ToolCall = serde_json::from_value(params)
            .map_err(|e| AppError::invalid_input(format!("expected {{name, arguments}}: {e}")))?;
        if call.name.is_empty() {
            return Err(AppError::invalid_input("missing tool name"));
        }
        Ok(call)
    }

    fn handle_unknown_method(request: JsonRpcRequest) -> JsonRpcResponse {
        warn!(method = %request.method, "Unknown MCP method");
        JsonRpcResponse::error(
            request.id,
            ERROR_METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )
    }

    fn serialize_result(id: Option<Value>, result: &impl serde::Serialize) -> JsonRpcResponse {
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(
                id,
                ERROR_INTERNAL_ERROR,
                format!("Internal server error: {e}"),
            ),
        }
    }
}
