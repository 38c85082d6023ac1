//! Repository for the `project_files` table.

use codeforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_file::{FileEntry, ProjectFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, filename, content, position, created_at";

/// File artifact storage for projects.
pub struct ProjectFileRepo;

impl ProjectFileRepo {
    /// List a project's files in insertion order.
    pub async fn list(pool: &PgPool, project_id: DbId) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_files WHERE project_id = $1 ORDER BY position");
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List a project's filenames in insertion order.
    pub async fn filenames(pool: &PgPool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT filename FROM project_files WHERE project_id = $1 ORDER BY position",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Replace a project's file set with exactly `files`, in the given order.
    ///
    /// Full-replacement semantics within a transaction: anything not in
    /// `files` is gone afterwards, and positions are renumbered 0..n.
    /// Also bumps the project's `updated_at` so recency ordering tracks
    /// file activity.
    pub async fn replace_all(
        pool: &PgPool,
        project_id: DbId,
        files: &[FileEntry],
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_files WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO project_files (project_id, filename, content, position)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let mut results = Vec::with_capacity(files.len());
        for (position, file) in files.iter().enumerate() {
            let row = sqlx::query_as::<_, ProjectFile>(&query)
                .bind(project_id)
                .bind(&file.filename)
                .bind(&file.content)
                .bind(position as i32)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        sqlx::query("UPDATE projects SET updated_at = NOW() WHERE id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(results)
    }

    /// Append one file after the project's current last position.
    ///
    /// Used by the generation merge path; `filename` must not collide with
    /// an existing file (enforced by `uq_project_files_name`).
    pub async fn append(
        pool: &PgPool,
        project_id: DbId,
        filename: &str,
        content: &str,
    ) -> Result<ProjectFile, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO project_files (project_id, filename, content, position)
             VALUES ($1, $2, $3,
                     (SELECT COALESCE(MAX(position) + 1, 0)
                      FROM project_files WHERE project_id = $1))
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .bind(filename)
            .bind(content)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE projects SET updated_at = NOW() WHERE id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }
}
