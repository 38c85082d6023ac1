//! Per-project workspace sessions.
//!
//! Each open project has one in-memory [`WorkspaceSession`] holding its
//! conversation log and submission state. Sessions are created on first
//! touch, shared by every tab looking at the same project, and discarded
//! when the project is deleted (or the process exits) -- reopening a
//! workspace after that starts from an empty log.

pub mod generation;

use std::collections::HashMap;
use std::sync::Arc;

use codeforge_core::conversation::ConversationEntry;
use codeforge_core::session::WorkspaceSession;
use codeforge_core::types::DbId;
use tokio::sync::{Mutex, RwLock};

/// Registry of live workspace sessions, keyed by project id.
#[derive(Default)]
pub struct WorkspaceManager {
    sessions: RwLock<HashMap<DbId, Arc<Mutex<WorkspaceSession>>>>,
}

impl WorkspaceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for a project, creating it on first touch.
    pub async fn session(&self, project_id: DbId) -> Arc<Mutex<WorkspaceSession>> {
        if let Some(session) = self.sessions.read().await.get(&project_id) {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write().await;
        // Re-check under the write lock; another task may have created it.
        Arc::clone(
            sessions
                .entry(project_id)
                .or_insert_with(|| Arc::new(Mutex::new(WorkspaceSession::new(project_id)))),
        )
    }

    /// Snapshot a project's conversation log, oldest entry first.
    pub async fn entries(&self, project_id: DbId) -> Vec<ConversationEntry> {
        let session = self.session(project_id).await;
        let session = session.lock().await;
        session.log().entries().to_vec()
    }

    /// Drop a project's session and its conversation log.
    pub async fn discard(&self, project_id: DbId) {
        self.sessions.write().await.remove(&project_id);
    }
}
