//! Per-batch records of stock mutations.

use chrono::{DateTime, Utc};

/// Kind of mutation recorded in a [`LogEntry`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Added,
    Removed,
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::Added => f.write_str("Added"),
            Action::Removed => f.write_str("Removed"),
        }
    }
}

/// One record of a stock mutation.
///
/// Entries live in a caller-owned `Vec<LogEntry>` for the duration of a batch;
/// they are never persisted alongside the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub action: Action,
    pub item: String,
    pub qty: i64,
}

impl LogEntry {
    pub fn new(action: Action, item: impl Into<String>, qty: i64) -> Self {
        Self::at(Utc::now(), action, item, qty)
    }

    /// Build an entry with an explicit timestamp (useful for deterministic tests).
    pub fn at(at: DateTime<Utc>, action: Action, item: impl Into<String>, qty: i64) -> Self {
        Self {
            at,
            action,
            item: item.into(),
            qty,
        }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {} {} of {}", self.at, self.action, self.qty, self.item)
    }
}
