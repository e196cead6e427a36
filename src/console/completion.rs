//! Command name completion
//!
//! Candidates are collected from the system table, then the table in
//! scope. A name matches when its first `prefix.len()` characters equal the
//! prefix, ignoring ASCII case.

use heapless::Vec;

use super::commands::CommandEntry;
use super::system::SYSTEM_COMMANDS;
use crate::config::AUTOCOMP_NUM;

/// Last candidate when more matches exist than can be shown
pub const MORE_MARKER: &str = "...";

/// Matching command names, at most `AUTOCOMP_NUM`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    names: Vec<&'static str, AUTOCOMP_NUM>,
    truncated: bool,
}

impl Candidates {
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            truncated: false,
        }
    }

    /// Add a match. Once full, the last slot becomes `...` and later
    /// matches are dropped.
    fn add(&mut self, name: &'static str) {
        if self.truncated {
            return;
        }
        if self.names.push(name).is_err() {
            if let Some(last) = self.names.last_mut() {
                *last = MORE_MARKER;
            }
            self.truncated = true;
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True if matches were dropped (last entry is `...`)
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }
}

/// What Tab should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing typed: show the command listing
    Listing,
    /// No command starts with the prefix
    NoMatch,
    /// Exactly one match: complete in place
    Unique(&'static str),
    /// Several matches: show them
    Ambiguous(Candidates),
}

/// Case-insensitive prefix test over the prefix length
pub fn is_prefix_match(prefix: &str, name: &str) -> bool {
    name.len() >= prefix.len()
        && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Collect all names in scope starting with `prefix`
pub fn candidates(prefix: &str, current: &'static [CommandEntry]) -> Candidates {
    let mut found = Candidates::new();
    for entry in SYSTEM_COMMANDS.iter().chain(current.iter()) {
        if is_prefix_match(prefix, entry.name) {
            found.add(entry.name);
        }
    }
    found
}

/// Decide the completion for the current line
pub fn complete(prefix: &str, current: &'static [CommandEntry]) -> Completion {
    if prefix.is_empty() {
        return Completion::Listing;
    }

    let found = candidates(prefix, current);
    let first = found.as_slice().first().copied();
    match (found.len(), first) {
        (1, Some(only)) => Completion::Unique(only),
        (0, _) => Completion::NoMatch,
        _ => Completion::Ambiguous(found),
    }
}
