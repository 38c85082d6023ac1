//! Credit ledger operations on the `users` table.

use codeforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::CreditBalance;

#[derive(sqlx::FromRow)]
struct LedgerRow {
    credits: i32,
    credits_used: i32,
}

impl From<LedgerRow> for CreditBalance {
    fn from(row: LedgerRow) -> Self {
        CreditBalance {
            credits: row.credits,
            credits_used: row.credits_used,
            remaining: row.credits - row.credits_used,
        }
    }
}

/// Gatekeeper for credit-costing operations.
///
/// `credits_used` only ever increases, and only through
/// [`reserve_and_commit`](CreditRepo::reserve_and_commit).
pub struct CreditRepo;

impl CreditRepo {
    /// Read a user's current ledger snapshot.
    pub async fn balance(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Option<CreditBalance>, sqlx::Error> {
        let row = sqlx::query_as::<_, LedgerRow>(
            "SELECT credits, credits_used FROM users WHERE id = $1",
        )
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(CreditBalance::from))
    }

    /// Atomically check and consume `cost` credits.
    ///
    /// A single conditional UPDATE performs the check-and-increment at the
    /// storage layer, so concurrent sessions for the same owner can never
    /// push `credits_used` past `credits` -- the losing call matches zero
    /// rows and returns `None` with no state change.
    pub async fn reserve_and_commit(
        pool: &PgPool,
        owner_id: DbId,
        cost: i32,
    ) -> Result<Option<CreditBalance>, sqlx::Error> {
        let row = sqlx::query_as::<_, LedgerRow>(
            "UPDATE users
             SET credits_used = credits_used + $2
             WHERE id = $1 AND credits_used + $2 <= credits
             RETURNING credits, credits_used",
        )
        .bind(owner_id)
        .bind(cost)
        .fetch_optional(pool)
        .await?;

        if let Some(ref r) = row {
            tracing::info!(
                owner_id,
                cost,
                credits_used = r.credits_used,
                "Committed credit reservation"
            );
        }
        Ok(row.map(CreditBalance::from))
    }
}
