//! Handler for project deployment.

use axum::extract::{Path, State};
use axum::Json;
use codeforge_core::error::CoreError;
use codeforge_core::types::DbId;
use codeforge_db::repositories::{ProjectFileRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Body of a successful deployment response.
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub deployed_url: String,
    pub status: String,
}

/// POST /api/v1/projects/{id}/deploy
///
/// Publishes the project via the external deployment service. Idempotent:
/// re-deploying overwrites the URL and leaves the status `deployed`. On
/// failure the project's prior status and URL are untouched and the error
/// is surfaced to the caller -- never retried here.
pub async fn deploy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeployResponse>> {
    let project = ProjectRepo::find_for_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let files = ProjectFileRepo::list(&state.pool, id).await?;
    if files.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project has no files to deploy".to_string(),
        )));
    }

    // The sole suspension point; a failure here propagates before any
    // status or URL write.
    let deployed_url = state.deployer.deploy(project.id, &project.name).await?;

    let updated = ProjectRepo::set_deployed(&state.pool, id, &deployed_url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, url = %deployed_url, "Project deployed");

    Ok(Json(DeployResponse {
        deployed_url,
        status: updated.status,
    }))
}
