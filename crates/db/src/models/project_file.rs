//! Project file artifact model and DTOs.

use codeforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file artifact row from the `project_files` table.
///
/// `position` is the insertion order within the project; the lowest position
/// is the canonical entry file.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFile {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(skip_serializing)]
    pub project_id: DbId,
    pub filename: String,
    pub content: String,
    pub position: i32,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// One filename/content pair in a full-replace request, in map order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileEntry {
    pub filename: String,
    pub content: String,
}
