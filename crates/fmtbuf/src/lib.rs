// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Growable-buffer string formatting
//!
//! Render `fmt::Arguments` into an owned, NUL-terminated heap buffer that is
//! grown until the complete output fits. Output is never truncated.
//!
//! # Features
//!
//! - **Bounded rendering**: `vsnprintf`-style primitive that reports the
//!   full output length, so a too-small buffer is regrown to the exact size
//! - **Owned result**: [`OwnedString`] exposes the content as `&str` or
//!   `&CStr` and frees itself on drop
//! - **Configurable growth**: initial size, ceiling, and the retry policy for
//!   formatting trait errors ([`FormatConfig`])
//! - **Native log bridge**: forward printf-style log callbacks of C libraries
//!   to `tracing` ([`bridge`])
//!
//! # Example
//!
//! ```rust
//! use fmtbuf::{format_owned, release_owned_string};
//!
//! let msg = format_owned!("decoded {} frames in {} ms", 120, 48)?;
//! assert_eq!(msg, "decoded 120 frames in 48 ms");
//! assert_eq!(msg.as_bytes_with_nul().last(), Some(&0));
//!
//! release_owned_string(Some(msg));
//! # Ok::<(), fmtbuf::Error>(())
//! ```

mod bounded;
pub mod bridge;
mod config;
mod error;
mod formatter;
mod owned;

pub use bounded::render_bounded;
pub use bridge::LogBridge;
pub use config::{
    FormatConfig, FormatConfigBuilder, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_CAPACITY,
};
pub use error::{Error, Result};
pub use formatter::Formatter;
pub use owned::OwnedString;

use std::fmt;

/// Format `args` into a newly allocated buffer using the default
/// configuration (256-byte first allocation).
///
/// Returns `Error::AllocationFailure` if any allocation fails; no partial
/// output is returned.
pub fn format_to_owned_string(args: fmt::Arguments<'_>) -> Result<OwnedString> {
    Formatter::default().format(args)
}

/// Release a buffer returned by the formatter. `None` is a no-op.
pub fn release_owned_string(buffer: Option<OwnedString>) {
    if let Some(buffer) = buffer {
        buffer.release();
    }
}

/// Format into an [`OwnedString`] with `format!` syntax.
///
/// Expands to [`format_to_owned_string`]`(format_args!(...))`.
#[macro_export]
macro_rules! format_owned {
    ($($arg:tt)*) => {
        $crate::format_to_owned_string(::std::format_args!($($arg)*))
    };
}
