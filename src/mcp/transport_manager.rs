// ABOUTME: Stdio transport carrying newline-delimited JSON-RPC between host and bridge
// ABOUTME: Processes one request at a time and writes exactly one line per response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::mcp_request_processor::McpRequestProcessor;
use crate::constants::errors::ERROR_PARSE;
use crate::errors::AppResult;
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};

/// Handles stdio transport for MCP communication
pub struct StdioTransport {
    processor: McpRequestProcessor,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(processor: McpRequestProcessor) -> Self {
        Self { processor }
    }

    /// Serve the process's stdin/stdout until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin or writing stdout fails
    pub async fn run_stdio(&self) -> AppResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run(stdin, stdout).await
    }

    /// Serve any line-oriented reader/writer pair until the reader hits EOF
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure of either stream
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("MCP stdio transport ready");
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.process_line(line).await {
                let mut encoded = serde_json::to_string(&response)?;
                encoded.push('\n');
                writer.write_all(encoded.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("stdin closed, stopping MCP stdio transport");
        Ok(())
    }

    async fn process_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Failed to parse MCP message: {}", e);
                return Some(Self::parse_error_response());
            }
        };

        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.processor.handle_request(request).await,
            Err(e) => {
                debug!("Message is not a JSON-RPC request: {}", e);
                Some(Self::parse_error_response())
            }
        }
    }

    /// Create a JSON-RPC parse error response
    fn parse_error_response() -> JsonRpcResponse {
        JsonRpcResponse::error(Some(Value::Null), ERROR_PARSE, "Parse error")
    }
}
