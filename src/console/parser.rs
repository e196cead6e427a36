//! Command line tokenizer
//!
//! Splits on blanks (space, tab, CR). Blanks between double quotes do not
//! split, and the quotes themselves are dropped; an unterminated quote runs
//! to end of line. At most `MAX_ARGS` tokens are kept, the rest are dropped.

use core::ops::RangeInclusive;
use core::str::FromStr;

use heapless::Vec;

use super::ConsoleError;
use crate::config::MAX_ARGS;

/// Tokenized command line, `argv[0]` is the command name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args<'a> {
    argv: Vec<&'a str, MAX_ARGS>,
}

impl<'a> Args<'a> {
    /// Create empty argument vector
    pub const fn empty() -> Self {
        Self { argv: Vec::new() }
    }

    /// Number of tokens, command name included
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// The command name (first token), empty for a blank line
    pub fn name(&self) -> &'a str {
        self.argv.first().copied().unwrap_or("")
    }

    /// Token by argv index (0 = command name)
    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.argv.get(idx).copied()
    }

    /// Argument by index (0-based, command name excluded)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.get(idx + 1)
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.argv
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.argv.iter().copied()
    }

    /// Parse argument `idx` (command name excluded) with `FromStr`
    pub fn parse<T: FromStr>(&self, idx: usize) -> Result<T, ConsoleError> {
        self.arg(idx)
            .ok_or(ConsoleError::MissingArg)?
            .parse()
            .map_err(|_| ConsoleError::InvalidValue)
    }

    /// Parse argument `idx` as an integer, see [`parse_int`]
    pub fn int(&self, idx: usize) -> Result<i32, ConsoleError> {
        let text = self.arg(idx).ok_or(ConsoleError::MissingArg)?;
        parse_int(text).ok_or(ConsoleError::InvalidValue)
    }

    /// Parse argument `idx` as an integer within `range`
    pub fn int_in(&self, idx: usize, range: RangeInclusive<i32>) -> Result<i32, ConsoleError> {
        let value = self.int(idx)?;
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(ConsoleError::OutOfRange)
        }
    }
}

fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

/// Split a command line into tokens, in place.
///
/// `line` must hold UTF-8 text. Each token is compacted towards its start
/// with the quote characters removed, so the buffer is scrambled afterwards.
pub fn tokenize(line: &mut [u8]) -> Args<'_> {
    let mut argv: Vec<&str, MAX_ARGS> = Vec::new();
    let mut rest = line;

    while !argv.is_full() {
        let start = rest.iter().position(|&b| !is_blank(b)).unwrap_or(rest.len());
        rest = &mut core::mem::take(&mut rest)[start..];
        if rest.is_empty() {
            break;
        }

        // `"` toggles quoting anywhere in the token
        let mut quoted = false;
        let mut len = 0;
        let mut end = 0;
        while end < rest.len() {
            let b = rest[end];
            if b == b'"' {
                quoted = !quoted;
            } else if !quoted && is_blank(b) {
                break;
            } else {
                rest[len] = b;
                len += 1;
            }
            end += 1;
        }

        let (token, tail) = core::mem::take(&mut rest).split_at_mut(end);
        let token: &[u8] = token;
        // Only ASCII quotes were removed, the token stays valid UTF-8
        if let Ok(text) = core::str::from_utf8(&token[..len]) {
            // Cannot fail: checked `is_full` above
            let _ = argv.push(text);
        }
        rest = tail;
    }

    Args { argv }
}

/// Parse an integer literal.
///
/// Accepts an optional sign, then `0x`/`0X` hex, `0b`/`0B` binary, a leading
/// `0` for octal, or plain decimal. Leading spaces are skipped. Returns
/// `None` on any stray character, missing digits or `i32` overflow.
pub fn parse_int(text: &str) -> Option<i32> {
    let text = text.trim_start_matches(' ');

    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (2, bin)
    } else if text.len() > 1 && text.starts_with('0') {
        (8, &text[1..])
    } else {
        (10, text)
    };

    if digits.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(digit)?;
    }

    if negative {
        if value > i32::MAX as u32 + 1 {
            return None;
        }
        Some((value as i64).wrapping_neg() as i32)
    } else {
        i32::try_from(value).ok()
    }
}
