//! REST client for the Grok chat-completions API.
//!
//! Wraps the upstream HTTP endpoint using [`reqwest`]. The request body is
//! the OpenAI-compatible chat shape the xAI API speaks; the first choice's
//! message content is the generated artifact.

use async_trait::async_trait;
use serde::Deserialize;

use codeforge_core::model_catalog::{TASK_DEBUGGING, TASK_REFACTORING};

use crate::generator::{CodeGenerator, GeneratedCode, GenerationError, GenerationRequest};

/// System prompt for fresh code generation.
const SYSTEM_CODE_GENERATION: &str = "You are an expert software engineer. Generate complete, \
     production-quality code for the user's request. Return only code, no commentary.";
/// System prompt for refactoring tasks.
const SYSTEM_REFACTORING: &str = "You are an expert software engineer. Refactor the code the \
     user describes without changing its behavior. Return only code, no commentary.";
/// System prompt for debugging tasks.
const SYSTEM_DEBUGGING: &str = "You are an expert software engineer. Diagnose the problem the \
     user describes and return the corrected code. Return only code, no commentary.";

/// HTTP client for the Grok generation service.
pub struct GrokClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl GrokClient {
    /// Create a new client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `https://api.x.ai`.
    /// * `api_key` - Bearer token for the generation service.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// System prompt for a task classification.
    fn system_prompt(task_type: &str) -> &'static str {
        if task_type == TASK_REFACTORING {
            SYSTEM_REFACTORING
        } else if task_type == TASK_DEBUGGING {
            SYSTEM_DEBUGGING
        } else {
            SYSTEM_CODE_GENERATION
        }
    }

    /// Ensure the response has a success status code, or produce an
    /// [`GenerationError::Api`] containing the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CodeGenerator for GrokClient {
    /// Submit one prompt for generation.
    ///
    /// Sends a `POST /v1/chat/completions` request and extracts the first
    /// choice's message content.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedCode, GenerationError> {
        let body = serde_json::json!({
            "model": request.model,
            "messages": [
                {"role": "system", "content": Self::system_prompt(&request.task_type)},
                {"role": "user", "content": request.prompt},
            ],
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed = response.json::<ChatResponse>().await?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::Malformed("response contained no choices".into()))?;

        tracing::info!(model = %parsed.model, "Generation round trip completed");

        Ok(GeneratedCode {
            content,
            model_used: parsed.model,
        })
    }
}
