//! Routes for the model tier catalog and the credit ledger snapshot.

use axum::routing::get;
use axum::Router;

use crate::handlers::{credits, generation};
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET /models   -> model tier catalog (public)
/// GET /credits  -> credit ledger snapshot (auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/models", get(generation::list_models))
        .route("/credits", get(credits::balance))
}
