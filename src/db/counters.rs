//! Counter queries backing sequential display-ID allocation.
//!
//! The increment is a single UPDATE .. RETURNING statement, so concurrent
//! callers always observe pairwise-distinct, strictly increasing values.
//! A read-then-write sequence here would reintroduce the duplicate-ID race.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Atomically advance the counter for `name` and return the new value.
    ///
    /// The first call for an unseen name yields 1. Persistence errors
    /// propagate to the caller; there is no retry.
    pub async fn next_counter_value(&self, name: &str) -> AppResult<i64> {
        let now = Utc::now();

        // Idempotent seed so the increment below always has a row to hit.
        let seed = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO counters (name, value, updated_at) VALUES (?, 0, ?) \
             ON CONFLICT(name) DO NOTHING",
            [name.into(), now.into()],
        );
        self.connection()
            .execute_raw(seed)
            .await
            .map_err(|e| AppError::Database(format!("Failed to seed counter '{}': {}", name, e)))?;

        let bump = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE counters SET value = value + 1, updated_at = ? WHERE name = ? RETURNING value",
            [now.into(), name.into()],
        );
        let row = self
            .connection()
            .query_one_raw(bump)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to advance counter '{}': {}", name, e))
            })?
            .ok_or_else(|| AppError::Database(format!("Counter row missing for '{}'", name)))?;

        let value: i64 = row
            .try_get("", "value")
            .map_err(|e| AppError::Database(format!("Failed to read counter value: {}", e)))?;

        Ok(value)
    }
}
