// ABOUTME: Arvo tool catalog, registry, capabilities, and invocation results
// ABOUTME: Pure data and lookup; the only side effects live in the MCP bridge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

/// Static declarations of the 29 Arvo tools
pub mod catalog;
/// Immutable descriptor registry
pub mod registry;
/// Normalized invocation outcome
pub mod result;
/// Read/write capability flags
pub mod traits;

pub use registry::{ToolDescriptor, ToolRegistry};
pub use result::ToolResult;
pub use traits::ToolCapabilities;
