//! Repository for the `projects` table.

use codeforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, owner_id, name, description, status, deployed_url, artifact_seq, created_at, updated_at";

/// Provides CRUD operations for projects.
///
/// Reads are owner-scoped: a project is only visible to the user who created
/// it, and a foreign id behaves exactly like a missing one.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project for `owner_id`, returning the created row.
    ///
    /// New projects start in `draft` with an empty file set.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID, scoped to its owner.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List an owner's projects, most recently touched first.
    pub async fn list_for_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE owner_id = $1 ORDER BY updated_at DESC");
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a project by ID, scoped to its owner. File rows cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Claim the next artifact sequence number for generated filenames.
    ///
    /// A single UPDATE .. RETURNING, so concurrent claims can never hand out
    /// the same number.
    pub async fn claim_artifact_seq(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        let row: Option<(i32,)> = sqlx::query_as(
            "UPDATE projects SET artifact_seq = artifact_seq + 1
             WHERE id = $1
             RETURNING artifact_seq",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(seq,)| seq))
    }

    /// Set a project's status. Returns `true` if a row was updated.
    pub async fn set_status(pool: &PgPool, id: DbId, status: &str) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE projects SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a successful deployment: status becomes `deployed` and the
    /// URL is overwritten. Idempotent -- re-deploying replaces the URL and
    /// leaves the status in place.
    pub async fn set_deployed(
        pool: &PgPool,
        id: DbId,
        deployed_url: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects
             SET status = 'deployed', deployed_url = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(deployed_url)
            .fetch_optional(pool)
            .await
    }
}
