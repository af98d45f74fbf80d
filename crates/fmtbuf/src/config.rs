// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Formatter configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Size of the first buffer allocation.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Largest single allocation the formatter will request by default (4 MiB).
///
/// Bounds the doubling retry when a formatting trait keeps failing. Larger
/// outputs need an explicit `max_capacity`.
pub const DEFAULT_MAX_CAPACITY: usize = 1 << 22;

/// Formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Size of the first buffer allocation, terminator included.
    pub initial_capacity: usize,
    /// Ceiling on any single buffer allocation.
    pub max_capacity: usize,
    /// Double the buffer and retry when a formatting trait reports an error.
    pub grow_on_error: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
            grow_on_error: true,
        }
    }
}

impl FormatConfig {
    /// Create a new builder.
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::default()
    }

    /// Check the capacity bounds.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidConfig("initial capacity must be non-zero"));
        }
        if self.initial_capacity > self.max_capacity {
            return Err(Error::InvalidConfig(
                "initial capacity exceeds maximum capacity",
            ));
        }
        Ok(())
    }
}

/// Builder for FormatConfig.
#[derive(Debug, Default)]
pub struct FormatConfigBuilder {
    initial_capacity: Option<usize>,
    max_capacity: Option<usize>,
    grow_on_error: Option<bool>,
}

impl FormatConfigBuilder {
    /// Set the first allocation size.
    pub fn initial_capacity(mut self, bytes: usize) -> Self {
        self.initial_capacity = Some(bytes);
        self
    }

    /// Set the allocation ceiling.
    pub fn max_capacity(mut self, bytes: usize) -> Self {
        self.max_capacity = Some(bytes);
        self
    }

    /// Enable or disable doubling on formatting errors.
    pub fn grow_on_error(mut self, enabled: bool) -> Self {
        self.grow_on_error = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> FormatConfig {
        let defaults = FormatConfig::default();
        FormatConfig {
            initial_capacity: self.initial_capacity.unwrap_or(defaults.initial_capacity),
            max_capacity: self.max_capacity.unwrap_or(defaults.max_capacity),
            grow_on_error: self.grow_on_error.unwrap_or(defaults.grow_on_error),
        }
    }
}
