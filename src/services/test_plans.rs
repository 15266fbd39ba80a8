//! Test plan store: create, read, update, delete, list.
//!
//! Plans carry lightweight embedded case specs rather than references to the
//! standalone test case store. Executions can be tagged with a plan ID, which
//! is what the plan stats endpoint folds over.

use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewTestPlan, TestPlan, UpdateTestPlan};

pub async fn create(pool: &DbPool, new: NewTestPlan) -> AppResult<TestPlan> {
    if new.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title is required".to_string()));
    }
    if new.description.trim().is_empty() {
        return Err(AppError::InvalidInput("Description is required".to_string()));
    }

    pool.insert_test_plan(new).await
}

pub async fn get(pool: &DbPool, id: Uuid) -> AppResult<TestPlan> {
    pool.get_test_plan(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Test plan".to_string()))
}

pub async fn list(pool: &DbPool) -> AppResult<Vec<TestPlan>> {
    pool.list_test_plans().await
}

/// Patch a plan. A provided embedded case list replaces the stored one
/// wholesale; there is no per-case merge.
pub async fn update(pool: &DbPool, id: Uuid, update: UpdateTestPlan) -> AppResult<TestPlan> {
    pool.update_test_plan(id, update)
        .await?
        .ok_or_else(|| AppError::NotFound("Test plan".to_string()))
}

/// Hard-delete a plan. Executions tagged with it keep their tag.
pub async fn delete(pool: &DbPool, id: Uuid) -> AppResult<()> {
    if !pool.delete_test_plan(id).await? {
        return Err(AppError::NotFound("Test plan".to_string()));
    }
    Ok(())
}
