//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` so integration tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses, with the two external services
//! replaced by stubs.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use codeforge_ai::{CodeGenerator, GeneratedCode, GenerationError, GenerationRequest};
use codeforge_api::auth::jwt::{generate_access_token, JwtConfig};
use codeforge_api::config::ServerConfig;
use codeforge_api::router::build_app_router;
use codeforge_api::state::AppState;
use codeforge_api::workspace::WorkspaceManager;
use codeforge_core::types::DbId;
use codeforge_db::models::user::{CreateUser, User};
use codeforge_db::repositories::UserRepo;
use codeforge_deploy::{DeployError, Deployer};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        generation_api_url: "http://stub.invalid".to_string(),
        generation_api_key: "test-key".to_string(),
        deploy_api_url: "http://stub.invalid".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

// ---------------------------------------------------------------------------
// Stub external services
// ---------------------------------------------------------------------------

/// Canned generation result: succeed with fixed content, or fail with an
/// upstream API error.
pub enum StubGeneration {
    Succeed { content: String },
    Fail { status: u16, body: String },
}

pub struct StubGenerator(pub StubGeneration);

impl StubGenerator {
    pub fn succeeding(content: &str) -> Arc<Self> {
        Arc::new(Self(StubGeneration::Succeed {
            content: content.to_string(),
        }))
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self(StubGeneration::Fail {
            status,
            body: body.to_string(),
        }))
    }
}

#[async_trait]
impl CodeGenerator for StubGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedCode, GenerationError> {
        match &self.0 {
            StubGeneration::Succeed { content } => Ok(GeneratedCode {
                content: content.clone(),
                model_used: request.model.clone(),
            }),
            StubGeneration::Fail { status, body } => Err(GenerationError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// Canned deployment result.
pub enum StubDeployment {
    Succeed { url: String },
    Fail { status: u16, body: String },
}

pub struct StubDeployer(pub StubDeployment);

impl StubDeployer {
    pub fn succeeding(url: &str) -> Arc<Self> {
        Arc::new(Self(StubDeployment::Succeed {
            url: url.to_string(),
        }))
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self(StubDeployment::Fail {
            status,
            body: body.to_string(),
        }))
    }
}

#[async_trait]
impl Deployer for StubDeployer {
    async fn deploy(&self, _project_id: DbId, _project_name: &str) -> Result<String, DeployError> {
        match &self.0 {
            StubDeployment::Succeed { url } => Ok(url.clone()),
            StubDeployment::Fail { status, body } => Err(DeployError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the shared application state with stubbed external services.
pub fn build_test_state(
    pool: PgPool,
    generator: Arc<dyn CodeGenerator>,
    deployer: Arc<dyn Deployer>,
) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
        generator,
        deployer,
        workspaces: Arc::new(WorkspaceManager::new()),
    }
}

/// Build the full application router around an existing state.
pub fn build_app(state: AppState) -> Router {
    let config = test_config();
    build_app_router(state, &config)
}

/// Convenience: state + router with a succeeding generator and deployer.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(build_test_state(
        pool,
        StubGenerator::succeeding("export default function App() { return null; }"),
        StubDeployer::succeeding("https://demo.codeforge.app"),
    ))
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

/// Insert a user with the given allowance and mint a bearer token for them.
pub async fn seed_user(pool: &PgPool, email: &str, credits: i32) -> (User, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: "Test User".to_string(),
            credits: Some(credits),
        },
    )
    .await
    .unwrap();
    let token = generate_access_token(user.id, &test_config().jwt).unwrap();
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn with_auth(builder: axum::http::request::Builder, token: &str) -> axum::http::request::Builder {
    if token.is_empty() {
        builder
    } else {
        builder.header("authorization", format!("Bearer {token}"))
    }
}

pub async fn get(app: &Router, path: &str, token: &str) -> Response<Body> {
    let request = with_auth(Request::builder().method("GET").uri(path), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("POST").uri(path), token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("PUT").uri(path), token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, path: &str, token: &str) -> Response<Body> {
    let request = with_auth(Request::builder().method("DELETE").uri(path), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project over HTTP and return its id.
pub async fn create_project(app: &Router, token: &str, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/projects",
        token,
        serde_json::json!({"name": name, "description": "test"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
