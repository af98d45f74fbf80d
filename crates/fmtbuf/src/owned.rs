// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Owned, NUL-terminated formatted string.

use std::ffi::CStr;
use std::fmt;
use std::ops::Deref;

/// Heap buffer holding a fully formatted, NUL-terminated string.
///
/// The allocation is sized by the formatter, not to the content: a message
/// rendered on the first attempt keeps the full initial buffer, so
/// `capacity()` may exceed `len() + 1`. Dropping the value releases the
/// buffer.
pub struct OwnedString {
    /// Content followed by its `'\0'` terminator.
    text: String,
    /// Buffer size the formatter requested, terminator included.
    capacity: usize,
}

impl OwnedString {
    /// Wrap a rendered buffer.
    ///
    /// `text` must be the complete output followed by `'\0'`, and `capacity`
    /// the size it was rendered against.
    pub(crate) fn from_rendered(text: String, capacity: usize) -> Self {
        debug_assert!(text.ends_with('\0'));
        debug_assert!(text.len() <= capacity);
        Self { text, capacity }
    }

    /// Formatted content without the terminator.
    pub fn as_str(&self) -> &str {
        &self.text[..self.len()]
    }

    /// Formatted content as bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Content followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// View as a C string.
    ///
    /// Stops at the first NUL, so content with interior NULs is shortened.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Content length in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the buffer the content was rendered into, terminator included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Convert into a `String`, dropping the terminator and spare capacity.
    pub fn into_string(mut self) -> String {
        self.text.pop();
        self.text.shrink_to_fit();
        self.text
    }

    /// Release the buffer.
    pub fn release(self) {
        drop(self);
    }
}

impl Deref for OwnedString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for OwnedString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for OwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedString")
            .field("content", &self.as_str())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl PartialEq<str> for OwnedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for OwnedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<OwnedString> for String {
    fn from(owned: OwnedString) -> Self {
        owned.into_string()
    }
}
