// ABOUTME: Immutable registry of Arvo tool descriptors with exact-name lookup
// ABOUTME: Serves discovery requests and the read-only classification of each tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! # Tool Registry
//!
//! The registry is built once at startup from the static catalog and never
//! changes afterwards: there is no runtime registration. Declaration order
//! is preserved so `tools/list` answers are stable.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::mcp::schema::{JsonSchema, PropertySchema, ToolAnnotations, ToolSchema};

use super::catalog;
use super::traits::ToolCapabilities;

/// Metadata record for one remote operation
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    /// Unique tool name, sent verbatim to the remote API
    pub name: &'static str,
    /// Human-readable purpose shown to the model
    pub description: &'static str,
    /// Accepted argument shape
    pub input_schema: JsonSchema,
    /// Read/write classification
    pub capabilities: ToolCapabilities,
}

impl ToolDescriptor {
    /// Descriptor for a non-mutating tool
    #[must_use]
    pub fn read_only(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            input_schema: JsonSchema::object(),
            capabilities: ToolCapabilities::READS_DATA,
        }
    }

    /// Descriptor for a tool that mutates user data
    #[must_use]
    pub fn write(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            input_schema: JsonSchema::object(),
            capabilities: ToolCapabilities::READS_DATA | ToolCapabilities::WRITES_DATA,
        }
    }

    /// Add an optional argument
    #[must_use]
    pub fn property(mut self, name: &str, schema: PropertySchema) -> Self {
        self.input_schema.properties.insert(name.to_owned(), schema);
        self
    }

    /// Add a required argument
    #[must_use]
    pub fn required_property(mut self, name: &str, schema: PropertySchema) -> Self {
        self.input_schema.required.push(name.to_owned());
        self.property(name, schema)
    }

    /// Whether the tool never mutates user data
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.capabilities.is_read_only()
    }

    /// MCP wire form for `tools/list`
    #[must_use]
    pub fn to_schema(&self) -> ToolSchema {
        let read_only = self.is_read_only();
        ToolSchema {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            input_schema: self.input_schema.clone(),
            annotations: Some(ToolAnnotations {
                read_only_hint: read_only,
                destructive_hint: !read_only,
            }),
        }
    }
}

/// Central registry for Arvo tools.
///
/// # Example
///
/// ```
/// use arvo_mcp::tools::registry::ToolRegistry;
///
/// let registry = ToolRegistry::builtin();
/// assert!(registry.lookup("get_user_profile").is_some());
/// assert!(registry.is_read_only("get_user_profile"));
/// assert!(!registry.is_read_only("save_memory"));
/// ```
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Registry holding the full Arvo catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_descriptors(catalog::arvo_tools())
    }

    /// Build a registry from descriptors; later duplicates of a name are dropped
    #[must_use]
    pub fn from_descriptors(descriptors: Vec<ToolDescriptor>) -> Self {
        let mut registry = Self {
            tools: Vec::with_capacity(descriptors.len()),
            index: HashMap::with_capacity(descriptors.len()),
        };
        for descriptor in descriptors {
            registry.insert(descriptor);
        }
        debug!("Tool registry initialized with {} tools", registry.len());
        registry
    }

    fn insert(&mut self, descriptor: ToolDescriptor) -> bool {
        if self.index.contains_key(descriptor.name) {
            warn!("Tool '{}' is already registered, skipping", descriptor.name);
            return false;
        }
        self.index.insert(descriptor.name, self.tools.len());
        self.tools.push(descriptor);
        true
    }

    /// Exact, case-sensitive lookup
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Whether the named tool is non-mutating. Unknown names are never read-only.
    #[must_use]
    pub fn is_read_only(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(ToolDescriptor::is_read_only)
    }

    /// Full catalog in declaration order
    #[must_use]
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Tool names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|t| t.name)
    }

    /// MCP wire form of every tool, in declaration order
    #[must_use]
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(ToolDescriptor::to_schema).collect()
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
