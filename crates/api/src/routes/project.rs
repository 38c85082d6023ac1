//! Route definitions for the `/projects` resource and its workspace
//! sub-resources.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{deployment, generation, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// DELETE /{id}                   -> delete
/// PUT    /{id}/files             -> replace_files
/// POST   /{id}/generate          -> generate
/// GET    /{id}/conversation      -> conversation
/// POST   /{id}/deploy            -> deploy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id).delete(project::delete),
        )
        .route("/projects/{id}/files", put(project::replace_files))
        .route("/projects/{id}/generate", post(generation::generate))
        .route(
            "/projects/{id}/conversation",
            get(generation::conversation),
        )
        .route("/projects/{id}/deploy", post(deployment::deploy))
}
