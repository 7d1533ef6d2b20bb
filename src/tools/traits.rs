// ABOUTME: Capability flags describing what an Arvo tool does to user data
// ABOUTME: Carries the read-only classification inside each tool descriptor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

//! # Tool Capabilities
//!
//! The read/write classification lives on the descriptor as a bitflag set,
//! so there is no second list of read-only names to keep in sync with the
//! catalog.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that tools declare for filtering and client hints.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool reads user data
        const READS_DATA = 0b0000_0001;
        /// Tool creates, modifies, or deletes user data
        const WRITES_DATA = 0b0000_0010;
    }
}

impl ToolCapabilities {
    /// Check if tool reads data
    #[must_use]
    pub const fn reads_data(self) -> bool {
        self.contains(Self::READS_DATA)
    }

    /// Check if tool writes data
    #[must_use]
    pub const fn writes_data(self) -> bool {
        self.contains(Self::WRITES_DATA)
    }

    /// Non-mutating: reads data and never writes it
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        self.reads_data() && !self.writes_data()
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.reads_data() {
            parts.push("reads_data");
        }
        if self.writes_data() {
            parts.push("writes_data");
        }
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}
