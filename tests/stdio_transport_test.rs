// ABOUTME: Tests for the newline-delimited stdio transport over in-memory streams
// ABOUTME: Verifies framing, parse errors, ordering, and EOF behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use arvo_mcp::constants::errors::ERROR_PARSE;
use arvo_mcp::mcp::{Bridge, McpRequestProcessor, StdioTransport};
use arvo_mcp::tools::ToolRegistry;
use common::{MockArvo, MockReply};
use serde_json::{json, Value};

async fn exchange(mock: &MockArvo, input: &str) -> Vec<Value> {
    common::init_test_logging();
    let processor = McpRequestProcessor::new(Bridge::new(ToolRegistry::builtin(), mock.client()));
    let transport = StdioTransport::new(processor);

    let mut output = Vec::new();
    transport.run(input.as_bytes(), &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.is_empty() || output.ends_with('\n'));
    output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_one_line_per_response() {
    let mock = MockArvo::builder().start().await;
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
    );

    let responses = exchange(&mock, input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "arvo-mcp");
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 29);
}

#[tokio::test]
async fn test_blank_lines_and_notifications_produce_no_output() {
    let mock = MockArvo::builder().start().await;
    let input = concat!(
        "\n",
        "   \n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
    );

    let responses = exchange(&mock, input).await;
    assert!(responses.is_empty());
}

#[tokio::test]
async fn test_explicit_null_id_is_answered() {
    let mock = MockArvo::builder().start().await;
    let input = concat!(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#, "\n");

    let responses = exchange(&mock, input).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[0]["result"], json!({}));
}

#[tokio::test]
async fn test_malformed_line_gets_parse_error_and_stream_continues() {
    let mock = MockArvo::builder().start().await;
    let input = concat!(
        "{not json\n",
        r#"{"jsonrpc":"2.0","id":"after","method":"ping"}"#,
        "\n",
    );

    let responses = exchange(&mock, input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], ERROR_PARSE);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[1]["id"], "after");
    assert_eq!(responses[1]["result"], json!({}));
}

#[tokio::test]
async fn test_non_request_json_is_parse_error() {
    let mock = MockArvo::builder().start().await;

    let responses = exchange(&mock, "[1, 2, 3]\n").await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["error"]["code"], ERROR_PARSE);
}

#[tokio::test]
async fn test_responses_follow_request_order() {
    let mock = MockArvo::builder()
        .execute(MockReply::result(json!("done")))
        .start()
        .await;
    let mut input = String::new();
    for id in 0..5 {
        input.push_str(
            &json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": "tools/call",
                "params": {"name": "get_user_profile"}
            })
            .to_string(),
        );
        input.push('\n');
    }

    let responses = exchange(&mock, &input).await;

    let ids: Vec<i64> = responses.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert!(responses
        .iter()
        .all(|r| r["result"]["content"][0]["text"] == "done"));
    assert_eq!(mock.execute_hits(), 5);
}

#[tokio::test]
async fn test_empty_input_returns_cleanly() {
    let mock = MockArvo::builder().start().await;
    assert!(exchange(&mock, "").await.is_empty());
}
