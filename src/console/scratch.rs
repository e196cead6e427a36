//! Bounded formatting buffer
//!
//! `core::fmt::Write` sink over a fixed `heapless::String`. Output past
//! capacity is dropped: once a write is cut short, later writes are ignored
//! so the text never ends with unrelated fragments.

use core::fmt;

use heapless::String;

/// Fixed-capacity text buffer that truncates instead of failing
pub struct Scratch<const N: usize> {
    buf: String<N>,
    truncated: bool,
}

impl<const N: usize> Scratch<N> {
    pub const fn new() -> Self {
        Self {
            buf: String::new(),
            truncated: false,
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// True if some output was dropped since the last `clear`
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Replace the contents with formatted text
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> &str {
        self.clear();
        let _ = fmt::Write::write_fmt(self, args);
        self.as_str()
    }
}

impl<const N: usize> Default for Scratch<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for Scratch<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for Scratch<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
