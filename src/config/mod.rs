// ABOUTME: Configuration module for the Arvo MCP bridge
// ABOUTME: Re-exports environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! Configuration module
//!
//! Configuration is environment-only, with command-line overrides applied by
//! the binary.

/// Environment and server configuration
pub mod environment;

pub use environment::{ApiKey, ServerConfig};
