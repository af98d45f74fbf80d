// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Growable-buffer formatter.
//!
//! Renders into a heap buffer with [`render_bounded`], reallocating and
//! retrying until the complete output fits. Each attempt formats its own
//! copy of the `fmt::Arguments`.

use crate::bounded::render_bounded;
use crate::{Error, FormatConfig, OwnedString, Result};
use std::fmt;
use tracing::{debug, trace};

/// Formats arguments into [`OwnedString`]s sized to fit.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a formatter with a validated configuration.
    pub fn new(config: FormatConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Render `args` into a newly allocated buffer.
    ///
    /// The result is never truncated. On any allocation failure the buffer
    /// acquired so far is released and `Error::AllocationFailure` is
    /// returned. Growth stops at `max_capacity` with
    /// `Error::CapacityExceeded`.
    pub fn format(&self, args: fmt::Arguments<'_>) -> Result<OwnedString> {
        let mut size = self.config.initial_capacity;
        let mut buf = allocate(size)?;

        loop {
            let next = match render_bounded(&mut buf, size, args) {
                Some(n) if n < size => return Ok(OwnedString::from_rendered(buf, size)),
                // Exact requirement: content plus terminator.
                Some(n) => self.bounded_size(n.checked_add(1))?,
                None if self.config.grow_on_error => self.bounded_size(size.checked_mul(2))?,
                None => return Err(Error::Format),
            };

            trace!("Growing format buffer: {} -> {} bytes", size, next);
            grow(&mut buf, next)?;
            size = next;
        }
    }

    fn bounded_size(&self, requested: Option<usize>) -> Result<usize> {
        let max = self.config.max_capacity;
        match requested {
            Some(size) if size <= max => Ok(size),
            other => Err(Error::CapacityExceeded {
                requested: other.unwrap_or(usize::MAX),
                max,
            }),
        }
    }
}

/// Reserve a `size`-byte buffer without touching its pages.
fn allocate(size: usize) -> Result<String> {
    let mut buf = String::new();
    if buf.try_reserve_exact(size).is_err() {
        debug!("Format buffer allocation of {} bytes failed", size);
        return Err(Error::AllocationFailure { requested: size });
    }
    Ok(buf)
}

/// Reallocate `buf` to hold `size` bytes. Its stale content is discarded.
fn grow(buf: &mut String, size: usize) -> Result<()> {
    let old = buf.capacity();
    buf.clear();
    if buf.try_reserve_exact(size).is_err() {
        debug!("Format buffer reallocation {} -> {} bytes failed", old, size);
        return Err(Error::AllocationFailure { requested: size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Fails its first `failures` render calls.
    struct Flaky {
        failures: Cell<usize>,
    }

    impl fmt::Display for Flaky {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let left = self.failures.get();
            if left > 0 {
                self.failures.set(left - 1);
                return Err(fmt::Error);
            }
            f.write_str("recovered")
        }
    }

    #[test]
    fn test_short_output_single_pass() {
        let out = Formatter::default()
            .format(format_args!("{} frames at {:.1} fps", 30, 29.97))
            .unwrap();
        assert_eq!(out, "30 frames at 30.0 fps");
        assert_eq!(out.capacity(), 256);
    }

    #[test]
    fn test_long_output_grows_to_exact_size() {
        let word = "x".repeat(1000);
        let out = Formatter::default().format(format_args!("{word}")).unwrap();
        assert_eq!(out.len(), 1000);
        assert_eq!(out.capacity(), 1001);
        assert_eq!(out.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn test_boundary_255_no_growth() {
        let s = "a".repeat(255);
        let out = Formatter::default().format(format_args!("{s}")).unwrap();
        assert_eq!(out.len(), 255);
        assert_eq!(out.capacity(), 256);
    }

    #[test]
    fn test_boundary_256_one_growth() {
        let s = "a".repeat(256);
        let out = Formatter::default().format(format_args!("{s}")).unwrap();
        assert_eq!(out.len(), 256);
        assert_eq!(out.capacity(), 257);
    }

    #[test]
    fn test_custom_initial_capacity() {
        let formatter = Formatter::new(FormatConfig::builder().initial_capacity(8).build()).unwrap();
        let out = formatter.format(format_args!("packet {}", 123_456)).unwrap();
        assert_eq!(out, "packet 123456");
        assert_eq!(out.capacity(), 14);
    }

    #[test]
    fn test_trait_error_doubles() {
        let flaky = Flaky {
            failures: Cell::new(1),
        };
        let out = Formatter::default().format(format_args!("{flaky}")).unwrap();
        assert_eq!(out, "recovered");
        assert_eq!(out.capacity(), 512);
    }

    #[test]
    fn test_persistent_trait_error_hits_ceiling() {
        let flaky = Flaky {
            failures: Cell::new(usize::MAX),
        };
        let formatter = Formatter::new(FormatConfig::builder().max_capacity(1024).build()).unwrap();

        let err = formatter.format(format_args!("{flaky}")).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                requested: 2048,
                max: 1024
            }
        );
    }

    #[test]
    fn test_persistent_trait_error_bounded_by_default() {
        struct AlwaysFails {
            calls: Cell<usize>,
        }

        impl fmt::Display for AlwaysFails {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.calls.set(self.calls.get() + 1);
                Err(fmt::Error)
            }
        }

        let broken = AlwaysFails {
            calls: Cell::new(0),
        };
        let err = Formatter::default()
            .format(format_args!("{broken}"))
            .unwrap_err();

        // 256 B doubled up to the 4 MiB ceiling: 15 passes, then refused.
        assert_eq!(
            err,
            Error::CapacityExceeded {
                requested: 8 * 1024 * 1024,
                max: crate::DEFAULT_MAX_CAPACITY
            }
        );
        assert_eq!(broken.calls.get(), 15);
    }

    #[test]
    fn test_trait_error_without_growth() {
        let flaky = Flaky {
            failures: Cell::new(1),
        };
        let formatter = Formatter::new(FormatConfig::builder().grow_on_error(false).build()).unwrap();
        assert_eq!(
            formatter.format(format_args!("{flaky}")).unwrap_err(),
            Error::Format
        );
    }

    #[test]
    fn test_known_length_over_ceiling() {
        let formatter = Formatter::new(FormatConfig::builder().max_capacity(300).build()).unwrap();
        let s = "z".repeat(400);
        assert_eq!(
            formatter.format(format_args!("{s}")).unwrap_err(),
            Error::CapacityExceeded {
                requested: 401,
                max: 300
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FormatConfig::builder().initial_capacity(0).build();
        assert!(matches!(
            Formatter::new(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_multibyte_content_survives_growth() {
        let s = "é".repeat(200);
        let out = Formatter::default().format(format_args!("[{s}]")).unwrap();
        assert_eq!(out.len(), 402);
        assert_eq!(out.as_str(), format!("[{s}]"));
    }
}
