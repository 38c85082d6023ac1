//! Code-generation service abstraction.
//!
//! [`CodeGenerator`] is the seam between the workspace orchestrator and the
//! upstream model provider. The production implementation is
//! [`crate::grok::GrokClient`]; tests substitute a stub.

use async_trait::async_trait;

/// One prompt → code request. Ephemeral -- lives for a single round trip and
/// is never persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The user's prompt, verbatim.
    pub prompt: String,
    /// Model tier id (one of `codeforge_core::model_catalog::MODEL_TIERS`).
    pub model: String,
    /// Task classification; selects the system prompt.
    pub task_type: String,
}

/// A successful generation result.
#[derive(Debug, Clone)]
pub struct GeneratedCode {
    /// The generated file content.
    pub content: String,
    /// Model id the service actually used.
    pub model_used: String,
}

/// Errors from the generation service layer.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Generation service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response that did not contain usable content.
    #[error("Malformed generation response: {0}")]
    Malformed(String),
}

/// Dispatch boundary for the sole network round trip of a generation
/// session. May suspend for an unbounded but finite duration; there is no
/// cancellation -- once dispatched, a request runs to completion or failure.
#[async_trait]
pub trait CodeGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GeneratedCode, GenerationError>;
}
