//! Line buffer for console input
//!
//! Fixed capacity, NUL-terminated at `len`. At most `MAX_CMDLINE - 1`
//! characters are ever stored, whatever path the bytes come from (typing,
//! history recall, completion).

use crate::config::MAX_CMDLINE;

/// Line input buffer
#[derive(Clone)]
pub struct LineBuffer {
    buf: [u8; MAX_CMDLINE],
    len: usize,
}

impl LineBuffer {
    /// Maximum number of characters the buffer accepts.
    pub const MAX_LEN: usize = MAX_CMDLINE - 1;

    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; MAX_CMDLINE],
            len: 0,
        }
    }

    /// Append a character.
    ///
    /// Returns `false` (buffer unchanged) when full.
    pub fn push(&mut self, c: u8) -> bool {
        if self.len >= Self::MAX_LEN {
            return false;
        }
        self.buf[self.len] = c;
        self.len += 1;
        self.buf[self.len] = 0;
        true
    }

    /// Remove and return the last character
    pub fn delete_last(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let c = self.buf[self.len];
        self.buf[self.len] = 0;
        Some(c)
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
    }

    /// Set buffer contents from string, truncating to capacity.
    ///
    /// Truncation never splits a multi-byte character.
    pub fn set(&mut self, s: &str) {
        let mut copy_len = s.len().min(Self::MAX_LEN);
        while !s.is_char_boundary(copy_len) {
            copy_len -= 1;
        }
        self.buf[..copy_len].copy_from_slice(&s.as_bytes()[..copy_len]);
        self.len = copy_len;
        self.buf[copy_len] = 0;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if no further character fits
    pub fn is_full(&self) -> bool {
        self.len >= Self::MAX_LEN
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Raw bytes including the terminating NUL
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
