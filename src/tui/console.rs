//! Outcome console: circular buffer of recent play results and notices.

use std::collections::VecDeque;
use std::time::SystemTime;

/// How a console line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Info,
    Busy,
    Error,
}

/// A timestamped console line.
#[derive(Debug, Clone)]
pub struct ConsoleEntry {
    pub timestamp: SystemTime,
    pub kind: EntryKind,
    pub message: String,
}

/// Circular buffer of recent messages.
#[derive(Debug, Clone)]
pub struct Console {
    entries: VecDeque<ConsoleEntry>,
    capacity: usize,
}

impl Console {
    /// Create a new console with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a message, evicting the oldest if at capacity.
    pub fn push(&mut self, kind: EntryKind, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ConsoleEntry {
            timestamp: SystemTime::now(),
            kind,
            message: message.into(),
        });
    }

    /// Get the N most recent entries (newest last).
    pub fn recent(&self, n: usize) -> Vec<&ConsoleEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(50)
    }
}
