// ABOUTME: Tests for the JSON-RPC 2.0 envelope types
// ABOUTME: Validates request, response, and notification structures and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use arvo_mcp::jsonrpc::{JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use serde_json::{json, Value};

#[test]
fn test_request_creation() {
    let req = JsonRpcRequest::new("tools/list", None);
    assert_eq!(req.jsonrpc, JSONRPC_VERSION);
    assert_eq!(req.method, "tools/list");
    assert!(req.params.is_none());
    assert!(req.id.is_some());
    assert!(!req.is_notification());
}

#[test]
fn test_notification_detection() {
    assert!(JsonRpcRequest::notification("notifications/initialized", None).is_notification());
    assert!(JsonRpcRequest::with_id("notifications/cancelled", None, json!(1)).is_notification());
}

#[test]
fn test_success_response() {
    let resp = JsonRpcResponse::success(Some(Value::from(1)), Value::from("ok"));
    assert!(resp.is_success());
    assert!(!resp.is_error());
    assert_eq!(resp.jsonrpc, JSONRPC_VERSION);
}

#[test]
fn test_error_response() {
    let resp = JsonRpcResponse::error(Some(Value::from(1)), -32600, "Invalid Request");
    assert!(resp.is_error());
    assert!(!resp.is_success());
    assert_eq!(resp.error.unwrap().message, "Invalid Request");
}

#[test]
fn test_error_response_serializes_null_id() {
    let resp = JsonRpcResponse::error(None, -32700, "Parse error");
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["id"], Value::Null);
    assert!(json.get("result").is_none());
    assert_eq!(json["error"]["code"], -32700);
}

#[test]
fn test_request_without_version_deserializes_for_validation() {
    let req: JsonRpcRequest = serde_json::from_str(r#"{"method":"ping","id":1}"#).unwrap();
    assert_eq!(req.jsonrpc, "");
    assert_eq!(req.id, Some(json!(1)));
}

#[test]
fn test_serialization() {
    let req = JsonRpcRequest::new("tools/call", Some(json!({"name": "get_user_profile"})));
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("\"jsonrpc\":\"2.0\""));
    assert!(json.contains("\"method\":\"tools/call\""));
}

#[test]
fn test_explicit_null_id_is_not_a_notification() {
    let req: JsonRpcRequest =
        serde_json::from_str(r#"{"jsonrpc":"2.0","method":"ping","id":null}"#).unwrap();
    assert_eq!(req.id, Some(Value::Null));
    assert!(!req.is_notification());

    let absent: JsonRpcRequest =
        serde_json::from_str(r#"{"jsonrpc":"2.0","method":"ping"}"#).unwrap();
    assert!(absent.id.is_none());
    assert!(absent.is_notification());
}
