//! Workspace conversation log.
//!
//! The log is an ordered, append-mostly sequence of tagged entries scoped to
//! one workspace session. A `Pending` placeholder is appended when a prompt
//! is dispatched and is resolved in place into exactly one `Assistant` or
//! `Error` entry, so a completed round trip always grows the log by two.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Placeholder text shown while a generation is in flight.
pub const PENDING_MESSAGE: &str = "Generating code...";

/// A single conversation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConversationEntry {
    /// The user's prompt, verbatim.
    User { content: String },
    /// Placeholder awaiting resolution into `Assistant` or `Error`.
    Pending { content: String },
    /// A completed generation summary.
    Assistant { content: String },
    /// A failed generation.
    Error { content: String },
}

impl ConversationEntry {
    pub fn is_pending(&self) -> bool {
        matches!(self, ConversationEntry::Pending { .. })
    }
}

/// Ordered history of one workspace session's messages.
///
/// Entries are never deleted individually; the whole log is discarded when
/// the workspace session ends.
#[derive(Debug, Default)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the tail of the log.
    pub fn append(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    /// Resolve the `Pending` tail in place.
    ///
    /// Errors if the log is empty or the tail is not `Pending` -- callers
    /// only use this to resolve a placeholder they appended themselves.
    pub fn resolve_pending(&mut self, entry: ConversationEntry) -> Result<(), CoreError> {
        match self.entries.last_mut() {
            Some(last) if last.is_pending() => {
                *last = entry;
                Ok(())
            }
            _ => Err(CoreError::Internal(
                "resolve_pending called but the log tail is not a Pending entry".to_string(),
            )),
        }
    }

    /// Restartable read of all entries, oldest first.
    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
