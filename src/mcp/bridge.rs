// ABOUTME: Bridges MCP tool invocations onto the Arvo API and normalizes every outcome
// ABOUTME: Never raises; unknown tools, HTTP failures, and transport errors become error results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! # Tool Bridge
//!
//! The bridge owns the registry and the API client for the whole process
//! lifetime. Invocation is a single remote round trip; argument validation
//! is left to the remote API.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, warn};

use crate::external::ArvoApi;
use crate::logging::AppLogger;
use crate::tools::{ToolDescriptor, ToolRegistry, ToolResult};

/// Turns host tool calls into Arvo API requests
#[derive(Clone)]
pub struct Bridge {
    registry: Arc<ToolRegistry>,
    api: Arc<dyn ArvoApi>,
}

impl Bridge {
    /// Create a bridge over a registry and an API client
    #[must_use]
    pub fn new(registry: ToolRegistry, api: Arc<dyn ArvoApi>) -> Self {
        Self {
            registry: Arc::new(registry),
            api,
        }
    }

    /// Every registered descriptor, in declaration order
    #[must_use]
    pub fn handle_list_tools(&self) -> &[ToolDescriptor] {
        self.registry.list()
    }

    /// Invoke a tool by name.
    ///
    /// Missing arguments are sent as `{}`. Unknown names are answered
    /// without contacting the API.
    pub async fn handle_invoke(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        let Some(descriptor) = self.registry.lookup(name) else {
            warn!(tool = %name, "Rejected call to unknown tool");
            return ToolResult::unknown_tool(name);
        };

        let arguments = arguments.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        let read_only = descriptor.is_read_only();
        let start = Instant::now();
        debug!(
            tool = %name,
            capabilities = %descriptor.capabilities.describe(),
            "Invoking tool"
        );

        let result = match self.api.execute_tool(name, &arguments).await {
            Ok(value) => ToolResult::from_remote_value(&value),
            Err(e) => {
                warn!(tool = %name, error = %e, "Tool invocation failed");
                ToolResult::error(&e.message)
            }
        };

        AppLogger::log_mcp_tool_call(
            name,
            read_only,
            !result.is_error,
            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, AppResult};
    use crate::external::{KeyValidation, RemoteToolDescriptor};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeApi {
        calls: AtomicUsize,
        last_call: Mutex<Option<(String, Value)>>,
        reply: fn() -> AppResult<Value>,
    }

    impl FakeApi {
        fn new(reply: fn() -> AppResult<Value>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
                reply,
            })
        }
    }

    #[async_trait]
    impl ArvoApi for FakeApi {
        async fn execute_tool(&self, tool_name: &str, arguments: &Value) -> AppResult<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_call.lock().unwrap() = Some((tool_name.to_owned(), arguments.clone()));
            (self.reply)()
        }

        async fn list_tools(&self) -> AppResult<Vec<RemoteToolDescriptor>> {
            Ok(Vec::new())
        }

        async fn validate_key(&self) -> AppResult<KeyValidation> {
            Ok(KeyValidation {
                valid: true,
                ..KeyValidation::default()
            })
        }
    }

    fn bridge_with(api: Arc<FakeApi>) -> Bridge {
        Bridge::new(ToolRegistry::builtin(), api)
    }

    #[tokio::test]
    async fn test_unknown_tool_never_reaches_api() {
        let api = FakeApi::new(|| Ok(json!("unused")));
        let bridge = bridge_with(api.clone());

        let result = bridge.handle_invoke("nonexistent_tool", None).await;

        assert!(result.is_error);
        assert_eq!(result.text, r#"{"error":"Unknown tool: nonexistent_tool"}"#);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let api = FakeApi::new(|| Ok(json!("unused")));
        let bridge = bridge_with(api.clone());

        let result = bridge.handle_invoke("Get_User_Profile", None).await;

        assert!(result.is_error);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_arguments_sent_as_empty_object() {
        let api = FakeApi::new(|| Ok(json!({"name": "Alex"})));
        let bridge = bridge_with(api.clone());

        let result = bridge.handle_invoke("get_user_profile", None).await;

        assert!(!result.is_error);
        let (tool, args) = api.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(tool, "get_user_profile");
        assert_eq!(args, json!({}));
    }

    #[tokio::test]
    async fn test_arguments_forwarded_unchanged() {
        let api = FakeApi::new(|| Ok(json!("ok")));
        let bridge = bridge_with(api.clone());

        let args = json!({"limit": 3, "unexpected": true});
        bridge
            .handle_invoke("get_recent_workouts", Some(args.clone()))
            .await;

        let (_, sent) = api.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(sent, args);
    }

    #[tokio::test]
    async fn test_string_result_passes_through() {
        let bridge = bridge_with(FakeApi::new(|| Ok(json!("hello"))));
        let result = bridge.handle_invoke("get_coach_info", None).await;
        assert_eq!(result.text, "hello");
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn test_api_failure_becomes_error_result() {
        let bridge = bridge_with(FakeApi::new(|| {
            Err(AppError::external_service("bad token"))
        }));
        let result = bridge.handle_invoke("save_memory", Some(json!({}))).await;
        assert!(result.is_error);
        assert_eq!(result.text, r#"{"error":"bad token"}"#);
    }

    #[test]
    fn test_list_tools_matches_registry() {
        let bridge = bridge_with(FakeApi::new(|| Ok(Value::Null)));
        let tools = bridge.handle_list_tools();
        assert_eq!(tools.len(), 29);
        assert_eq!(tools[0].name, "get_user_profile");
        assert_eq!(tools[28].name, "apply_swap");
    }
}
