// ABOUTME: Application constants for the Arvo MCP bridge
// ABOUTME: Protocol identifiers, environment variable names, remote endpoints, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! Application-wide constants organized by domain

/// Protocol version and server identification
pub mod protocol {
    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";

    /// MCP protocol revision advertised during `initialize`
    pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";

    /// Server name reported in `serverInfo`
    pub const SERVER_NAME: &str = "arvo-mcp";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Instructions returned to MCP clients on `initialize`
    pub const SERVER_INSTRUCTIONS: &str = "This server exposes the Arvo AI workout coach. \
        Use the get_* tools to read training data and the write tools to update the user's \
        plan, memory, and workout.";
}

/// Environment variable names
pub mod env_config {
    /// Bearer credential for the Arvo API
    pub const ARVO_API_KEY: &str = "ARVO_API_KEY";

    /// Optional override of the Arvo API base URL
    pub const ARVO_API_URL: &str = "ARVO_API_URL";

    /// Optional HTTP request timeout in seconds
    pub const ARVO_REQUEST_TIMEOUT_SECS: &str = "ARVO_REQUEST_TIMEOUT_SECS";
}

/// Default configuration values
pub mod defaults {
    /// Production Arvo API
    pub const API_BASE_URL: &str = "https://arvo.guru";

    /// Per-request timeout applied by the HTTP client
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Where users obtain an API key
    pub const API_KEY_SETTINGS_URL: &str = "https://arvo.guru/settings#api-keys";
}

/// Remote API paths, relative to the base URL
pub mod endpoints {
    /// Tool execution (POST) and discovery (GET)
    pub const MCP_TOOLS: &str = "/api/v1/mcp/tools";

    /// Credential validation
    pub const VALIDATE_KEY: &str = "/api/v1/auth/validate-key";
}

/// JSON-RPC error codes
pub mod errors {
    /// Invalid JSON was received
    pub const ERROR_PARSE: i32 = -32700;

    /// The JSON sent is not a valid request object
    pub const ERROR_INVALID_REQUEST: i32 = -32600;

    /// The method does not exist
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid method parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;

    /// Internal JSON-RPC error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;

    /// Implementation-defined server error (remote API unavailable)
    pub const ERROR_SERVER_UNAVAILABLE: i32 = -32000;
}

/// Service names for structured logging
pub mod service_names {
    /// Service identifier attached to startup logs
    pub const ARVO_MCP_SERVER: &str = "arvo-mcp";
}
