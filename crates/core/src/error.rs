use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Insufficient credits: {required} required, {remaining} remaining")]
    InsufficientCredits { required: i32, remaining: i32 },

    #[error("A generation is already in flight for project {project_id}")]
    ConcurrentGeneration { project_id: DbId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
