//! Execution recorder.
//!
//! Recording is a fixed sequence of independent writes, in order:
//! validate, append the execution, patch the owning test case, then
//! best-effort fold into the project rollup. The sequence as a whole is
//! deliberately not transactional; only the rollup update itself is atomic.

use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Execution, ExecutionStatus, NewExecution};

/// Record one execution of a test case.
///
/// A failed execution must carry observations; the check happens before any
/// write, so a rejected call leaves no execution behind. Recording always
/// overwrites the test case's own status field with the execution outcome.
/// A rollup failure for `projectId` is logged and swallowed; it never fails
/// the overall call.
pub async fn record(pool: &DbPool, new: NewExecution) -> AppResult<Execution> {
    // Step 1: validate before any write.
    if new.status == ExecutionStatus::Failed
        && new
            .observations
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
    {
        return Err(AppError::InvalidInput(
            "Observations are required when an execution fails".to_string(),
        ));
    }

    // The referenced test case must exist at creation time.
    if pool.get_test_case(new.test_id).await?.is_none() {
        return Err(AppError::NotFound("Test case".to_string()));
    }

    let executed_at = chrono::Utc::now();

    // Step 2: append the execution record.
    let execution = pool.insert_execution(&new, executed_at).await?;

    // Step 3: patch the owning test case's run history and status.
    pool.patch_last_execution(new.test_id, new.status, &new.executed_by, executed_at)
        .await?;

    // Step 4: best-effort project rollup.
    if let Some(project_id) = new.project_id {
        let passed = new.status == ExecutionStatus::Passed;
        if let Err(e) = pool
            .apply_execution_to_rollup(project_id, passed, executed_at)
            .await
        {
            tracing::warn!(
                "Failed to update rollup for project {}: {}",
                project_id,
                e
            );
        }
    }

    Ok(execution)
}

/// Execution history of one test case, newest first. Fails with not-found
/// when the test case itself does not exist; an existing case with no runs
/// yields an empty list.
pub async fn history(pool: &DbPool, test_id: Uuid) -> AppResult<Vec<Execution>> {
    if pool.get_test_case(test_id).await?.is_none() {
        return Err(AppError::NotFound("Test case".to_string()));
    }
    pool.executions_by_test(test_id).await
}
