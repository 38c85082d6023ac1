//! Project lifecycle status constants and validation.

use crate::error::CoreError;

/// Freshly created, nothing published yet.
pub const STATUS_DRAFT: &str = "draft";
/// Provisioned from an external source repository.
pub const STATUS_IMPORTED: &str = "imported";
/// A generation round trip is currently in flight.
pub const STATUS_GENERATING: &str = "generating";
/// Published; `deployed_url` points at the live site.
pub const STATUS_DEPLOYED: &str = "deployed";

/// All valid project statuses.
pub const VALID_PROJECT_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_IMPORTED,
    STATUS_GENERATING,
    STATUS_DEPLOYED,
];

/// Validate that a status string is one of the known constants.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_PROJECT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid project status '{status}'. Must be one of: {}",
            VALID_PROJECT_STATUSES.join(", ")
        )))
    }
}

/// Validate a project name before creation. Names must be non-blank.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    Ok(())
}
