// ABOUTME: Main library entry point for the Arvo MCP bridge
// ABOUTME: Exposes the Arvo workout coach to MCP hosts over stdio via the Arvo HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

#![deny(unsafe_code)]

//! # Arvo MCP
//!
//! A Model Context Protocol (MCP) server that lets AI assistants read and
//! update a user's Arvo training data. It holds no data of its own: every
//! tool call is forwarded to the Arvo API and the answer is relayed back.
//!
//! ## Architecture
//!
//! - **Tools**: the static catalog of 29 tools and its registry
//! - **External**: the HTTP client for the Arvo API
//! - **MCP**: stdio transport, JSON-RPC routing, and the tool bridge
//! - **Config**: environment-driven configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use arvo_mcp::config::ServerConfig;
//! use arvo_mcp::errors::AppResult;
//! use arvo_mcp::external::ArvoApiClient;
//! use arvo_mcp::mcp::server_lifecycle;
//! use arvo_mcp::tools::ToolRegistry;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let client = Arc::new(ArvoApiClient::new(&config)?);
//!     server_lifecycle::run(ToolRegistry::builtin(), client).await?;
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Arvo API client
pub mod external;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Logging configuration
pub mod logging;

/// MCP protocol implementation
pub mod mcp;

/// Tool catalog and registry
pub mod tools;
