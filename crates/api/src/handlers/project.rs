//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use codeforge_core::error::CoreError;
use codeforge_core::project::validate_project_name;
use codeforge_core::types::DbId;
use codeforge_db::models::project::{CreateProject, Project, ProjectWithFiles};
use codeforge_db::models::project_file::{FileEntry, ProjectFile};
use codeforge_db::repositories::{ProjectFileRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_project_name(&input.name)?;
    let project = ProjectRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_for_owner(&state.pool, user.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithFiles>> {
    let project = ProjectRepo::find_for_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let files = ProjectFileRepo::list(&state.pool, id).await?;
    Ok(Json(ProjectWithFiles { project, files }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        // The workspace session (and its conversation log) dies with the
        // project.
        state.workspaces.discard(id).await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// PUT /api/v1/projects/{id}/files
///
/// Full-replacement semantics: the stored file set becomes exactly the
/// supplied list, in the supplied order.
pub async fn replace_files(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(files): Json<Vec<FileEntry>>,
) -> AppResult<Json<Vec<ProjectFile>>> {
    ProjectRepo::find_for_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let stored = ProjectFileRepo::replace_all(&state.pool, id, &files).await?;
    Ok(Json(stored))
}
