//! Command history with ring buffer
//!
//! Static allocation, `HISTORY_COUNT` entries of one line each. When the
//! ring is full the oldest entry is overwritten silently.

use super::line_buffer::LineBuffer;
use super::ring::RingIndex;
use crate::config::HISTORY_COUNT;

type Slot = RingIndex<HISTORY_COUNT>;

/// Command history ring buffer
pub struct History {
    /// Ring buffer of command lines
    entries: [LineBuffer; HISTORY_COUNT],
    /// Slot holding the most recent entry (`None` until the first save)
    newest: Option<Slot>,
    /// Number of valid entries
    count: usize,
    /// Current browse position (`None` = not browsing)
    browse: Option<Slot>,
}

impl History {
    /// Create empty history
    pub const fn new() -> Self {
        const EMPTY: LineBuffer = LineBuffer::new();
        Self {
            entries: [EMPTY; HISTORY_COUNT],
            newest: None,
            count: 0,
            browse: None,
        }
    }

    /// Save a submitted line.
    ///
    /// Blank lines are ignored. A line equal (ignoring ASCII case) to the
    /// most recent entry is not stored again. Browsing restarts either way.
    pub fn save(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        let duplicate = self
            .newest
            .map(|slot| self.entries[slot.get()].as_str().eq_ignore_ascii_case(line))
            .unwrap_or(false);

        if !duplicate {
            let slot = self.newest.map(Slot::next).unwrap_or(Slot::ZERO);
            self.entries[slot.get()].set(line);
            self.newest = Some(slot);
            self.count = (self.count + 1).min(HISTORY_COUNT);
        }

        self.browse = None;
    }

    /// Get previous (older) command
    ///
    /// Starts at the newest entry and stops at the oldest one.
    pub fn previous(&mut self) -> Option<&str> {
        let newest = self.newest?;
        let oldest = self.oldest();

        let pos = match self.browse {
            None => newest,
            Some(p) if p != oldest => p.prev(),
            Some(p) => p, // Already at oldest
        };

        self.browse = Some(pos);
        Some(self.entries[pos.get()].as_str())
    }

    /// Get next (newer) command
    ///
    /// Starts at the oldest entry when not browsing and stops at the newest.
    pub fn next(&mut self) -> Option<&str> {
        let newest = self.newest?;

        let pos = match self.browse {
            None => self.oldest(),
            Some(p) if p != newest => p.next(),
            Some(p) => p, // Already at newest
        };

        self.browse = Some(pos);
        Some(self.entries[pos.get()].as_str())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if nothing was saved yet
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True while the user is browsing with the cursor keys
    pub fn is_browsing(&self) -> bool {
        self.browse.is_some()
    }

    /// Stored entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let mut slot = self.newest;
        (0..self.count).filter_map(move |_| {
            let current = slot?;
            slot = Some(current.prev());
            Some(self.entries[current.get()].as_str())
        })
    }

    /// Oldest populated slot
    fn oldest(&self) -> Slot {
        match self.newest {
            Some(newest) if self.count == HISTORY_COUNT => newest.next(),
            _ => Slot::ZERO,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
