//! Recent activity log.
//!
//! Keeps the last few notifications so the dashboard can show a short
//! "recent activity" list under the gauges. Messages longer than
//! `ACTIVITY_LINE_LENGTH - 1` characters are truncated.
//!
//! Pressing the same button twice in a row produces the same notification
//! twice. Such repeats are folded into the newest entry and counted instead
//! of pushing older activity off the list:
//!
//! ```text
//! Vehicle unlocked successfully
//! Horn activated (x3)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut log = ActivityLog::new();
//! log.push("Vehicle unlocked successfully");
//! log.push("Horn activated");
//! log.push("Horn activated");
//!
//! for entry in log.iter() {
//!     // newest last, "Horn activated (x2)"
//! }
//! ```

use core::fmt;

use heapless::{Deque, String};

// =============================================================================
// Activity Log Configuration
// =============================================================================

/// Maximum number of entries kept.
pub const ACTIVITY_LOG_SIZE: usize = 5;

/// Maximum characters per stored message.
pub const ACTIVITY_LINE_LENGTH: usize = 48;

// =============================================================================
// Activity Entry
// =============================================================================

/// One message and how many times in a row it was pushed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActivityEntry {
    text: String<ACTIVITY_LINE_LENGTH>,
    repeats: u16,
}

impl ActivityEntry {
    fn new(msg: &str) -> Self {
        let mut text = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= ACTIVITY_LINE_LENGTH - 1 || text.push(c).is_err() {
                break;
            }
        }
        Self { text, repeats: 1 }
    }

    /// Stored (possibly truncated) message.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Consecutive occurrences, at least 1.
    #[inline]
    pub const fn repeats(&self) -> u16 {
        self.repeats
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeats > 1 {
            write!(f, "{} (x{})", self.text, self.repeats)
        } else {
            f.write_str(&self.text)
        }
    }
}

// =============================================================================
// Activity Log Ring Buffer
// =============================================================================

/// Ring buffer of recent entries.
///
/// The oldest entry is dropped when the buffer is full.
pub struct ActivityLog {
    buffer: Deque<ActivityEntry, ACTIVITY_LOG_SIZE>,
}

impl ActivityLog {
    /// Create a new empty log.
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
        }
    }

    /// Record a message.
    ///
    /// A repeat of the newest message bumps its count. Anything else becomes
    /// a new entry, dropping the oldest one if full.
    pub fn push(&mut self, msg: &str) {
        let entry = ActivityEntry::new(msg);

        if let Some(newest) = self.buffer.back_mut()
            && newest.text == entry.text
        {
            newest.repeats = newest.repeats.saturating_add(1);
            return;
        }

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(entry).ok();
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.buffer.iter()
    }

    /// Text of the most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.buffer.back().map(ActivityEntry::text)
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
