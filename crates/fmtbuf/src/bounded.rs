// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounded formatting into a reserved string buffer.
//!
//! [`render_bounded`] behaves like `vsnprintf` with a buffer of `size` bytes:
//! it stores at most `size - 1` bytes followed by a NUL terminator and
//! reports the length the complete output would have had, so the caller
//! knows exactly how large a retry buffer must be. The buffer never grows
//! past `size` bytes, so a buffer reserved for `size` is never reallocated.

use std::fmt::{self, Write};

/// Truncating `fmt::Write` sink that keeps counting past its limit.
struct BoundedWriter<'a> {
    buf: &'a mut String,
    /// Content limit, one byte of `size` reserved for the terminator.
    limit: usize,
    /// Set once a piece was cut; later pieces are only counted.
    truncated: bool,
    /// Bytes the full output needs, terminator excluded.
    total: usize,
}

impl<'a> BoundedWriter<'a> {
    fn new(buf: &'a mut String, size: usize) -> Self {
        buf.clear();
        Self {
            buf,
            limit: size.saturating_sub(1),
            truncated: false,
            total: 0,
        }
    }

    fn terminate(self, size: usize) {
        if size > 0 {
            self.buf.push('\0');
        }
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.total = self.total.saturating_add(s.len());
        if self.truncated {
            return Ok(());
        }

        let room = self.limit - self.buf.len();
        if s.len() <= room {
            self.buf.push_str(s);
            return Ok(());
        }

        // Keep the stored prefix valid UTF-8.
        let mut n = room;
        while !s.is_char_boundary(n) {
            n -= 1;
        }
        self.buf.push_str(&s[..n]);
        self.truncated = true;
        Ok(())
    }
}

/// Render `args` into `buf` as if it were a `size`-byte C buffer.
///
/// `buf` is cleared first. Returns the untruncated output length
/// (terminator excluded), or `None` when a formatting trait implementation
/// reported an error and the length is unknown. The output fit iff the
/// returned length is `< size`; in that case `buf` holds the complete
/// output followed by `'\0'`.
///
/// Whatever was stored is NUL-terminated when `size` is non-zero. A cut
/// never splits a UTF-8 sequence, so a truncated prefix may be up to three
/// bytes shorter than `size - 1`.
pub fn render_bounded(buf: &mut String, size: usize, args: fmt::Arguments<'_>) -> Option<usize> {
    let mut writer = BoundedWriter::new(buf, size);
    let outcome = writer.write_fmt(args);
    let total = writer.total;
    writer.terminate(size);
    outcome.ok().map(|()| total)
}
