//! Action history for single-step undo
//!
//! This module provides a LIFO record of the player actions that can be
//! reversed. Each undoable action pushes exactly one entry carrying the
//! payload its reversal needs.

use serde::{Deserialize, Serialize};

/// A recorded player action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A fruit was grabbed; reversed by dropping it
    Grab { fruit: String },

    /// A fruit was dropped; reversed by grabbing it
    Drop { fruit: String },

    /// The player rested; reversed by subtracting the awarded points
    Rest { points: i64 },
}

/// LIFO record of undoable actions (most recent at the end)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionHistory {
    entries: Vec<HistoryEntry>,
}

impl ActionHistory {
    pub fn new() -> Self {
        ActionHistory {
            entries: Vec::new(),
        }
    }

    /// Record an action
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Get the most recent entry without removing it
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Pop and return the most recent entry
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Number of recorded actions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the entire history
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All recorded entries, oldest first (for inspection/serialization)
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
