//! Test case store: create, read, update, delete, list.

use uuid::Uuid;

use crate::db::DbPool;
use crate::db::test_cases::NewTestCaseRecord;
use crate::error::{AppError, AppResult};
use crate::models::{NewTestCase, TestCase, TestCaseFilter, UpdateTestCase};

use super::sequence;

/// Create a test case: validate, allocate the sequential display ID, stamp
/// the creator, and persist. The returned record carries concrete timestamps
/// so the caller can render it immediately.
pub async fn create(pool: &DbPool, new: NewTestCase) -> AppResult<TestCase> {
    validate_new(&new)?;

    let sequential_id = sequence::allocate_test_case_id(pool).await?;

    pool.insert_test_case(NewTestCaseRecord {
        sequential_id,
        name: new.name,
        description: new.description,
        case_type: new.case_type,
        priority: new.priority,
        steps: new.steps,
        prerequisites: new.prerequisites,
        assigned_to: new.assigned_to,
        created_by: new.created_by,
    })
    .await
}

/// Get a test case by ID.
pub async fn get(pool: &DbPool, id: Uuid) -> AppResult<TestCase> {
    pool.get_test_case(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Test case".to_string()))
}

/// List test cases, newest-created-first, with conjunctive equality filters.
pub async fn list(pool: &DbPool, filter: &TestCaseFilter) -> AppResult<Vec<TestCase>> {
    pool.list_test_cases(filter).await
}

/// Shallow-merge an update over the stored record.
pub async fn update(pool: &DbPool, id: Uuid, update: UpdateTestCase) -> AppResult<TestCase> {
    pool.update_test_case(id, update)
        .await?
        .ok_or_else(|| AppError::NotFound("Test case".to_string()))
}

/// Hard-delete a test case. Executions referencing it become orphaned;
/// referential integrity is an explicit non-goal here.
pub async fn delete(pool: &DbPool, id: Uuid) -> AppResult<()> {
    if !pool.delete_test_case(id).await? {
        return Err(AppError::NotFound("Test case".to_string()));
    }
    Ok(())
}

/// Uniform required-field validation for creation: name, description,
/// assignee, and at least one step, each step carrying an expected result.
fn validate_new(new: &NewTestCase) -> AppResult<()> {
    if new.name.trim().is_empty() {
        return Err(AppError::InvalidInput("Name is required".to_string()));
    }
    if new.description.trim().is_empty() {
        return Err(AppError::InvalidInput("Description is required".to_string()));
    }
    if new.assigned_to.trim().is_empty() {
        return Err(AppError::InvalidInput("Assignee is required".to_string()));
    }
    if new.steps.is_empty() {
        return Err(AppError::InvalidInput(
            "At least one step is required".to_string(),
        ));
    }
    for (index, step) in new.steps.iter().enumerate() {
        if step.description.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Step {} is missing a description",
                index + 1
            )));
        }
        if step.expected_result.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Step {} is missing an expected result",
                index + 1
            )));
        }
    }
    Ok(())
}
