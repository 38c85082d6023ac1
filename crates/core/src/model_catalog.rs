//! Model tier catalog and task classification.
//!
//! Each tier maps a generation-service model id to a display name and an
//! integer credit cost. The catalog is static: tiers and prices change with
//! a deploy, not at runtime.

use serde::Serialize;

use crate::error::CoreError;

/// A named generation-service configuration with an associated credit cost.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelTier {
    /// Generation-service model id, sent verbatim upstream.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line latency/quality tradeoff description.
    pub description: &'static str,
    /// Credits charged per successful generation.
    pub credits: i32,
}

/// All purchasable model tiers, highest quality first.
pub const MODEL_TIERS: &[ModelTier] = &[
    ModelTier {
        id: "grok-4-latest",
        name: "Grok 4 (Frontier)",
        description: "Deep reasoning",
        credits: 3,
    },
    ModelTier {
        id: "grok-4-1-fast-reasoning",
        name: "Grok 4 Fast Reasoning",
        description: "Agentic workflows",
        credits: 2,
    },
    ModelTier {
        id: "grok-4-1-fast-non-reasoning",
        name: "Grok 4 Fast",
        description: "High-throughput",
        credits: 1,
    },
];

/// Model tier used when a request does not name one.
pub const DEFAULT_MODEL_TIER: &str = "grok-4-1-fast-reasoning";

/// Look up a tier by model id.
pub fn find_tier(model_id: &str) -> Result<&'static ModelTier, CoreError> {
    MODEL_TIERS
        .iter()
        .find(|t| t.id == model_id)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown model '{model_id}'. Must be one of: {}",
                MODEL_TIERS
                    .iter()
                    .map(|t| t.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}

// ---------------------------------------------------------------------------
// Task classification
// ---------------------------------------------------------------------------

/// Generate new application code from a prompt.
pub const TASK_CODE_GENERATION: &str = "code_generation";
/// Rework existing code without changing behavior.
pub const TASK_REFACTORING: &str = "refactoring";
/// Diagnose and fix a reported problem.
pub const TASK_DEBUGGING: &str = "debugging";

/// All valid task classifications.
pub const VALID_TASK_TYPES: &[&str] = &[TASK_CODE_GENERATION, TASK_REFACTORING, TASK_DEBUGGING];

/// Validate that a task type is one of the known constants.
pub fn validate_task_type(task_type: &str) -> Result<(), CoreError> {
    if VALID_TASK_TYPES.contains(&task_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid task type '{task_type}'. Must be one of: {}",
            VALID_TASK_TYPES.join(", ")
        )))
    }
}
