pub mod catalog;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /models                              model tier catalog (public)
/// /credits                             credit ledger snapshot
///
/// /projects                            list, create
/// /projects/{id}                       get (with files), delete
/// /projects/{id}/files                 full replace (PUT)
/// /projects/{id}/generate              prompt submission (POST)
/// /projects/{id}/conversation          workspace conversation log
/// /projects/{id}/deploy                publish (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(project::router())
}
