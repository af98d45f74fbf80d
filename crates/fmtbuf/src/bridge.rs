// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Native log forwarding.
//!
//! C libraries that log through a printf-style callback hand over a numeric
//! severity and a format/argument pair. [`LogBridge`] renders those messages
//! with the growable formatter, trims the trailing newline the native side
//! appends, and re-emits them through `tracing` under [`NATIVE_TARGET`].

use crate::{FormatConfig, Formatter, Result};
use std::fmt;
use tracing::{debug, error, info, trace, warn, Level};

/// `tracing` target for forwarded messages.
pub const NATIVE_TARGET: &str = "fmtbuf::native";

/// Native severity scale; lower is more severe.
pub mod native {
    pub const QUIET: i32 = -8;
    pub const PANIC: i32 = 0;
    pub const FATAL: i32 = 8;
    pub const ERROR: i32 = 16;
    pub const WARNING: i32 = 24;
    pub const INFO: i32 = 32;
    pub const VERBOSE: i32 = 40;
    pub const DEBUG: i32 = 48;
    pub const TRACE: i32 = 56;
}

/// Map a native severity to a `tracing` level.
///
/// Anything noisier than [`native::TRACE`] maps to `None` and is dropped, as
/// does anything below [`native::PANIC`] ([`native::QUIET`] and other
/// "print nothing" values).
pub fn map_level(level: i32) -> Option<Level> {
    if level < native::PANIC {
        None
    } else if level <= native::ERROR {
        Some(Level::ERROR)
    } else if level <= native::WARNING {
        Some(Level::WARN)
    } else if level <= native::INFO {
        Some(Level::INFO)
    } else if level <= native::DEBUG {
        Some(Level::DEBUG)
    } else if level <= native::TRACE {
        Some(Level::TRACE)
    } else {
        None
    }
}

/// Native threshold matching a `tracing` level, for configuring the
/// library's own filter.
pub fn native_level(level: Level) -> i32 {
    match level {
        Level::TRACE => native::TRACE,
        Level::DEBUG => native::DEBUG,
        Level::INFO => native::INFO,
        Level::WARN => native::WARNING,
        Level::ERROR => native::ERROR,
    }
}

/// Forwards native log messages to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LogBridge {
    formatter: Formatter,
}

impl LogBridge {
    /// Create a bridge that renders with a custom configuration.
    pub fn with_config(config: FormatConfig) -> Result<Self> {
        Ok(Self {
            formatter: Formatter::new(config)?,
        })
    }

    /// Render and emit one native message.
    ///
    /// Returns the level it was emitted at, or `None` when [`map_level`]
    /// drops the severity. Formatting failures are logged and returned.
    pub fn forward(&self, level: i32, args: fmt::Arguments<'_>) -> Result<Option<Level>> {
        let message = match self.formatter.format(args) {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to convert native log message to string: {}", e);
                return Err(e);
            }
        };

        // The native side terminates messages with a newline.
        let text = message.trim();

        let mapped = map_level(level);
        match mapped {
            Some(Level::ERROR) => error!(target: NATIVE_TARGET, "{}", text),
            Some(Level::WARN) => warn!(target: NATIVE_TARGET, "{}", text),
            Some(Level::INFO) => info!(target: NATIVE_TARGET, "{}", text),
            Some(Level::DEBUG) => debug!(target: NATIVE_TARGET, "{}", text),
            Some(Level::TRACE) => trace!(target: NATIVE_TARGET, "{}", text),
            None => {}
        }

        message.release();
        Ok(mapped)
    }
}

/// Forward one native message with the default formatter.
pub fn forward(level: i32, args: fmt::Arguments<'_>) -> Result<Option<Level>> {
    LogBridge::default().forward(level, args)
}
