//! Submenu stack and prompt
//!
//! Each frame is the submenu entry that was activated; its nested table is
//! the one in scope. Depth is capped at `MENU_DEPTH`: entering one more
//! level replaces the innermost frame instead of growing.

use core::fmt::Write;

use heapless::Vec;

use super::commands::CommandEntry;
use super::scratch::Scratch;
use super::ConsoleError;
use crate::config::{MAX_PROMPT, MENU_DEPTH, NEWLINE, PATH_SEPARATOR};

/// Stack of active submenus plus the prompt derived from it
pub struct MenuStack {
    root: &'static [CommandEntry],
    frames: Vec<&'static CommandEntry, MENU_DEPTH>,
    prompt: Scratch<MAX_PROMPT>,
    marker: &'static str,
}

impl MenuStack {
    /// Stack with no root table and an empty prompt
    pub const fn empty() -> Self {
        Self {
            root: &[],
            frames: Vec::new(),
            prompt: Scratch::new(),
            marker: "",
        }
    }

    /// Stack at `root`, prompt ending in `marker`
    pub fn new(root: &'static [CommandEntry], marker: &'static str) -> Self {
        let mut stack = Self::empty();
        stack.reset(root, marker);
        stack
    }

    /// Drop all frames and install a new root
    pub fn reset(&mut self, root: &'static [CommandEntry], marker: &'static str) {
        self.root = root;
        self.marker = marker;
        self.frames.clear();
        self.rebuild_prompt();
    }

    /// Enter a submenu.
    ///
    /// Returns the frame evicted when the stack was already full.
    pub fn push(
        &mut self,
        entry: &'static CommandEntry,
    ) -> Result<Option<&'static CommandEntry>, ConsoleError> {
        debug_assert!(entry.table().is_some(), "only submenu entries can be pushed");
        if entry.table().is_none() {
            return Err(ConsoleError::InvalidState);
        }

        let evicted = if self.frames.is_full() {
            self.frames.pop()
        } else {
            None
        };
        self.frames.push(entry).map_err(|_| ConsoleError::InvalidState)?;

        self.rebuild_prompt();
        Ok(evicted)
    }

    /// Leave the innermost submenu. No-op at root.
    pub fn pop(&mut self) -> Option<&'static CommandEntry> {
        let entry = self.frames.pop()?;
        self.rebuild_prompt();
        Some(entry)
    }

    /// Table in scope: the innermost submenu's table, or the root
    pub fn current_table(&self) -> &'static [CommandEntry] {
        self.frames
            .last()
            .and_then(|entry| entry.table())
            .unwrap_or(self.root)
    }

    pub fn root(&self) -> &'static [CommandEntry] {
        self.root
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Active submenu entries, outermost first
    pub fn frames(&self) -> &[&'static CommandEntry] {
        &self.frames
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    /// Prompt format: newline, `\name` per frame, marker
    fn rebuild_prompt(&mut self) {
        self.prompt.clear();
        let _ = self.prompt.write_str(NEWLINE);
        for entry in self.frames.iter() {
            let _ = self.prompt.write_str(PATH_SEPARATOR);
            let _ = self.prompt.write_str(entry.name);
        }
        let _ = self.prompt.write_str(self.marker);
    }
}

impl Default for MenuStack {
    fn default() -> Self {
        Self::empty()
    }
}
