use std::sync::Arc;

use codeforge_ai::CodeGenerator;
use codeforge_deploy::Deployer;

use crate::config::ServerConfig;
use crate::workspace::WorkspaceManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: codeforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Code-generation service client.
    pub generator: Arc<dyn CodeGenerator>,
    /// Deployment service client.
    pub deployer: Arc<dyn Deployer>,
    /// Per-project workspace sessions (conversation logs + in-flight state).
    pub workspaces: Arc<WorkspaceManager>,
}
