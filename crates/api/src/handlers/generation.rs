//! Handlers for prompt submission and the workspace conversation log.

use axum::extract::{Path, State};
use axum::Json;
use codeforge_core::conversation::ConversationEntry;
use codeforge_core::error::CoreError;
use codeforge_core::model_catalog::{ModelTier, DEFAULT_MODEL_TIER, MODEL_TIERS, TASK_CODE_GENERATION};
use codeforge_core::types::DbId;
use codeforge_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::workspace::generation::{submit, GenerationOutcome};

/// Body of POST /projects/{id}/generate.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Defaults to [`DEFAULT_MODEL_TIER`].
    pub model: Option<String>,
    /// Defaults to [`TASK_CODE_GENERATION`].
    pub task_type: Option<String>,
}

/// POST /api/v1/projects/{id}/generate
///
/// Runs one complete generation round trip for the project's workspace.
pub async fn generate(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<Json<GenerationOutcome>> {
    let project = ProjectRepo::find_for_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let model = input.model.as_deref().unwrap_or(DEFAULT_MODEL_TIER);
    let task_type = input.task_type.as_deref().unwrap_or(TASK_CODE_GENERATION);

    let outcome = submit(&state, &project, &input.prompt, model, task_type).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/projects/{id}/conversation
///
/// Snapshot of the workspace conversation log, oldest entry first.
pub async fn conversation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ConversationEntry>>> {
    ProjectRepo::find_for_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(state.workspaces.entries(id).await))
}

/// GET /api/v1/models
///
/// The purchasable model tier catalog. Public -- pricing is shown before
/// login.
pub async fn list_models() -> Json<&'static [ModelTier]> {
    Json(MODEL_TIERS)
}
