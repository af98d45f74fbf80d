// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use thiserror::Error;

/// Errors returned by the growable-buffer formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The allocator refused the first buffer or a regrow; nothing is kept.
    #[error("Failed to allocate format buffer of {requested} bytes")]
    AllocationFailure { requested: usize },

    /// Growing would pass the configured `max_capacity`.
    #[error("Format buffer of {requested} bytes exceeds maximum capacity {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// A formatting trait failed while doubling on error is disabled.
    #[error("Formatting trait implementation returned an error")]
    Format,

    /// Rejected `FormatConfig`.
    #[error("Invalid format configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result alias for formatter operations.
pub type Result<T> = std::result::Result<T, Error>;
