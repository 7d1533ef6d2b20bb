// ABOUTME: Model Context Protocol (MCP) implementation for the Arvo bridge
// ABOUTME: Stdio transport, JSON-RPC routing, tool bridge, and server lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

pub mod bridge;
pub mod mcp_request_processor;
pub mod schema;
pub mod server_lifecycle;
pub mod transport_manager;

pub use bridge::Bridge;
pub use mcp_request_processor::McpRequestProcessor;
pub use server_lifecycle::ShutdownReason;
pub use transport_manager::StdioTransport;
