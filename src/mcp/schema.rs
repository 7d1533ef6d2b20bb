// ABOUTME: MCP protocol schema definitions and message structures
// ABOUTME: Tool schemas, initialize handshake payloads, and tool call request/response shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for the MCP messages this server speaks, so wire
//! shapes are never assembled from ad-hoc JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// MCP Tool Schema Definition, as returned by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
}

/// Behavioural hints attached to a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolAnnotations {
    #[serde(rename = "readOnlyHint")]
    pub read_only_hint: bool,
    #[serde(rename = "destructiveHint")]
    pub destructive_hint: bool,
}

/// JSON Schema Definition for tool arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

impl JsonSchema {
    /// Empty object schema: no properties, nothing required
    #[must_use]
    pub fn object() -> Self {
        Self {
            schema_type: "object".into(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    fn primitive(property_type: &str, description: &str) -> Self {
        Self {
            property_type: property_type.into(),
            description: Some(description.into()),
            enum_values: None,
            items: None,
        }
    }

    /// `string` property
    #[must_use]
    pub fn string(description: &str) -> Self {
        Self::primitive("string", description)
    }

    /// `number` property
    #[must_use]
    pub fn number(description: &str) -> Self {
        Self::primitive("number", description)
    }

    /// `string` property restricted to the given values
    #[must_use]
    pub fn string_enum(values: &[&str], description: &str) -> Self {
        Self {
            enum_values: Some(values.iter().map(|v| (*v).to_owned()).collect()),
            ..Self::string(description)
        }
    }

    /// `array` of strings
    #[must_use]
    pub fn string_array(description: &str) -> Self {
        Self {
            items: Some(Box::new(Self {
                property_type: "string".into(),
                description: None,
                enum_values: None,
                items: None,
            })),
            ..Self::primitive("array", description)
        }
    }
}

/// Tool Call parameters (`tools/call`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<Content>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// Content types for MCP messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    pub capabilities: ServerCapabilities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Create a new initialize response. The tool catalog is static, so
    /// `listChanged` is always false.
    #[must_use]
    pub fn new(protocol_version: &str, server_name: &str, server_version: &str) -> Self {
        Self {
            protocol_version: protocol_version.to_owned(),
            server_info: ServerInfo {
                name: server_name.to_owned(),
                version: server_version.to_owned(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            instructions: Some(crate::constants::protocol::SERVER_INSTRUCTIONS.to_owned()),
        }
    }
}
