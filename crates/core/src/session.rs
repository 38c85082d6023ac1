//! Workspace session state machine.
//!
//! One [`WorkspaceSession`] exists per open project workspace. It owns the
//! conversation log and tracks whether a generation round trip is in flight.
//! The machine is driven by three commands:
//!
//! ```text
//! Idle --begin--> Submitted --resolve_success/resolve_failure--> Idle
//! ```
//!
//! `begin` while `Submitted` is a hard rejection, never a queue: the caller
//! surfaces [`CoreError::ConcurrentGeneration`] to the user.

use crate::conversation::{ConversationEntry, ConversationLog, PENDING_MESSAGE};
use crate::error::CoreError;
use crate::types::DbId;

/// Whether a generation round trip is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitted,
}

/// Reject a blank prompt before any log mutation or external call.
pub fn validate_prompt(prompt: &str) -> Result<(), CoreError> {
    if prompt.trim().is_empty() {
        return Err(CoreError::Validation(
            "Prompt must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Per-project workspace session: conversation log + submission state.
#[derive(Debug)]
pub struct WorkspaceSession {
    project_id: DbId,
    state: SessionState,
    log: ConversationLog,
}

impl WorkspaceSession {
    pub fn new(project_id: DbId) -> Self {
        Self {
            project_id,
            state: SessionState::Idle,
            log: ConversationLog::new(),
        }
    }

    pub fn project_id(&self) -> DbId {
        self.project_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Start a submission: append `User(prompt)` then a `Pending`
    /// placeholder, and move to `Submitted`.
    ///
    /// Rejects with [`CoreError::ConcurrentGeneration`] if a submission is
    /// already in flight; the log is not touched in that case. The prompt
    /// must already be validated -- pre-flight checks happen before any log
    /// mutation.
    pub fn begin(&mut self, prompt: &str) -> Result<(), CoreError> {
        if self.state == SessionState::Submitted {
            return Err(CoreError::ConcurrentGeneration {
                project_id: self.project_id,
            });
        }

        self.log.append(ConversationEntry::User {
            content: prompt.to_string(),
        });
        self.log.append(ConversationEntry::Pending {
            content: PENDING_MESSAGE.to_string(),
        });
        self.state = SessionState::Submitted;
        Ok(())
    }

    /// Resolve the in-flight submission successfully: the `Pending` tail
    /// becomes `Assistant(summary)` and the session returns to `Idle`.
    pub fn resolve_success(&mut self, summary: String) -> Result<(), CoreError> {
        self.resolve(ConversationEntry::Assistant { content: summary })
    }

    /// Resolve the in-flight submission as failed: the `Pending` tail
    /// becomes `Error(message)` and the session returns to `Idle`.
    pub fn resolve_failure(&mut self, message: String) -> Result<(), CoreError> {
        self.resolve(ConversationEntry::Error { content: message })
    }

    fn resolve(&mut self, entry: ConversationEntry) -> Result<(), CoreError> {
        if self.state != SessionState::Submitted {
            return Err(CoreError::Internal(format!(
                "resolve called on project {} with no submission in flight",
                self.project_id
            )));
        }
        self.log.resolve_pending(entry)?;
        self.state = SessionState::Idle;
        Ok(())
    }
}
