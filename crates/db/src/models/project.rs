//! Project entity model and DTOs.

use codeforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::project_file::ProjectFile;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// One of the `codeforge_core::project` status constants.
    pub status: String,
    pub deployed_url: Option<String>,
    /// Monotonic discriminator for generated artifact filenames.
    #[serde(skip_serializing)]
    pub artifact_seq: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
}

/// A project together with its ordered file artifacts.
#[derive(Debug, Serialize)]
pub struct ProjectWithFiles {
    #[serde(flatten)]
    pub project: Project,
    pub files: Vec<ProjectFile>,
}
