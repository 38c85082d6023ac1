//! User entity model and credit balance DTO.

use codeforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// Rows are provisioned by the external identity collaborator; this service
/// only ever mutates `credits_used`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub credits: i32,
    pub credits_used: i32,
    pub created_at: Timestamp,
}

/// DTO for provisioning a user (tests and local tooling).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    /// Defaults to 10 if omitted.
    pub credits: Option<i32>,
}

/// Snapshot of a user's credit ledger.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreditBalance {
    pub credits: i32,
    pub credits_used: i32,
    pub remaining: i32,
}
