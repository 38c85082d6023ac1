//! Client for the external deployment service.
//!
//! Publishing a project is a single round trip: the service receives the
//! project reference and answers with the public URL it is now serving.
//! Failures are surfaced to the caller untouched -- the controller never
//! retries automatically and never mutates project state on error.

use async_trait::async_trait;
use codeforge_core::types::DbId;
use serde::Deserialize;

/// Errors from the deployment service layer.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Deployment request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Deployment service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Dispatch boundary for the deployment round trip.
#[async_trait]
pub trait Deployer: Send + Sync {
    /// Publish a project, returning its public URL.
    async fn deploy(&self, project_id: DbId, project_name: &str) -> Result<String, DeployError>;
}

#[derive(Debug, Deserialize)]
struct DeployResponse {
    deployed_url: String,
}

/// HTTP client for the deployment service.
pub struct HttpDeployer {
    client: reqwest::Client,
    api_url: String,
}

impl HttpDeployer {
    /// Create a new client.
    ///
    /// * `api_url` - Base HTTP URL of the deployment service.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl Deployer for HttpDeployer {
    async fn deploy(&self, project_id: DbId, project_name: &str) -> Result<String, DeployError> {
        let body = serde_json::json!({
            "project_id": project_id,
            "name": project_name,
        });

        let response = self
            .client
            .post(format!("{}/deployments", self.api_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DeployError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<DeployResponse>().await?;
        tracing::info!(project_id, url = %parsed.deployed_url, "Deployment completed");
        Ok(parsed.deployed_url)
    }
}
