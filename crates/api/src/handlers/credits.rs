//! Handler for the credit ledger snapshot.

use axum::extract::State;
use axum::Json;
use codeforge_core::error::CoreError;
use codeforge_db::models::user::CreditBalance;
use codeforge_db::repositories::CreditRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/credits
pub async fn balance(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<CreditBalance>> {
    let balance = CreditRepo::balance(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::Unauthorized(
            "Unknown user".into(),
        )))?;
    Ok(Json(balance))
}
