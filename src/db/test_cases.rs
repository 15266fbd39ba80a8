//! Database queries for test case records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::test_case::{self, ActiveModel as TestCaseActiveModel, Entity as TestCase};
use crate::error::{AppError, AppResult};
use crate::models::{
    self, CaseStatus, ExecutionStatus, Identity, TestCaseFilter, TestStep, UpdateTestCase,
};

use super::DbPool;

/// Represents a validated test case to be inserted. The sequential display ID
/// has already been allocated by the caller.
pub struct NewTestCaseRecord {
    pub sequential_id: String,
    pub name: String,
    pub description: String,
    pub case_type: models::CaseType,
    pub priority: models::CasePriority,
    pub steps: Vec<TestStep>,
    pub prerequisites: Vec<String>,
    pub assigned_to: String,
    pub created_by: Identity,
}

impl DbPool {
    /// Insert a new test case. Status starts as Pending with no run history.
    pub async fn insert_test_case(&self, rec: NewTestCaseRecord) -> AppResult<models::TestCase> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        let model = TestCaseActiveModel {
            id: Set(id),
            sequential_id: Set(rec.sequential_id),
            name: Set(rec.name),
            description: Set(rec.description),
            case_type: Set(rec.case_type.as_str().to_string()),
            priority: Set(rec.priority.as_str().to_string()),
            status: Set(CaseStatus::Pending.as_str().to_string()),
            steps: Set(serde_json::to_value(&rec.steps)?),
            prerequisites: Set(serde_json::to_value(&rec.prerequisites)?),
            assigned_to: Set(rec.assigned_to),
            created_by: Set(rec.created_by.to_json()),
            updated_by: Set(None),
            last_executed_by: Set(None),
            last_run: Set(None),
            last_execution_status: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert test case: {}", e)))?;

        model_to_test_case(result)
    }

    /// Get a single test case by ID.
    pub async fn get_test_case(&self, id: Uuid) -> AppResult<Option<models::TestCase>> {
        let result = TestCase::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test case: {}", e)))?;

        result.map(model_to_test_case).transpose()
    }

    /// List test cases, newest-created-first, applying the conjunctive
    /// equality filters. Filter values are matched as-is against the stored
    /// labels; an unknown label simply matches nothing.
    pub async fn list_test_cases(&self, filter: &TestCaseFilter) -> AppResult<Vec<models::TestCase>> {
        let mut select = TestCase::find();

        if let Some(ref status) = filter.status {
            select = select.filter(test_case::Column::Status.eq(status));
        }
        if let Some(ref case_type) = filter.case_type {
            select = select.filter(test_case::Column::CaseType.eq(case_type));
        }
        if let Some(ref priority) = filter.priority {
            select = select.filter(test_case::Column::Priority.eq(priority));
        }

        let rows = select
            .order_by_desc(test_case::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test cases: {}", e)))?;

        rows.into_iter().map(model_to_test_case).collect()
    }

    /// Shallow-merge the provided fields over the stored record and stamp the
    /// updater. Enum fields are not revalidated against the existing state.
    /// Returns None when the test case does not exist.
    pub async fn update_test_case(
        &self,
        id: Uuid,
        update: UpdateTestCase,
    ) -> AppResult<Option<models::TestCase>> {
        let existing = TestCase::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test case: {}", e)))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: TestCaseActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(description) = update.description {
            active.description = Set(description);
        }
        if let Some(case_type) = update.case_type {
            active.case_type = Set(case_type.as_str().to_string());
        }
        if let Some(priority) = update.priority {
            active.priority = Set(priority.as_str().to_string());
        }
        if let Some(steps) = update.steps {
            active.steps = Set(serde_json::to_value(&steps)?);
        }
        if let Some(prerequisites) = update.prerequisites {
            active.prerequisites = Set(serde_json::to_value(&prerequisites)?);
        }
        if let Some(assigned_to) = update.assigned_to {
            active.assigned_to = Set(assigned_to);
        }
        active.updated_by = Set(Some(update.updated_by.to_json()));
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update test case: {}", e)))?;

        model_to_test_case(updated).map(Some)
    }

    /// Patch the run-history fields after an execution was recorded. The test
    /// case status itself is overwritten with the execution outcome.
    pub async fn patch_last_execution(
        &self,
        test_id: Uuid,
        status: ExecutionStatus,
        executed_by: &Identity,
        executed_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let existing = TestCase::find_by_id(test_id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test case: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Test case".to_string()))?;

        let mut active: TestCaseActiveModel = existing.into();
        active.status = Set(CaseStatus::from(status).as_str().to_string());
        active.last_run = Set(Some(executed_at));
        active.last_execution_status = Set(Some(status.as_str().to_string()));
        active.last_executed_by = Set(Some(executed_by.to_json()));
        active.updated_at = Set(executed_at);

        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to patch test case: {}", e)))?;

        Ok(())
    }

    /// Fetch all raw test case rows without parsing enum labels. Used by the
    /// stats aggregator, which tallies recognized labels and skips the rest
    /// instead of failing on a single corrupt row.
    pub async fn list_test_case_rows(&self) -> AppResult<Vec<test_case::Model>> {
        TestCase::find()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test cases: {}", e)))
    }

    /// Hard-delete a test case. Executions referencing it are left in place.
    /// Returns false when nothing was deleted.
    pub async fn delete_test_case(&self, id: Uuid) -> AppResult<bool> {
        let result = TestCase::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test case: {}", e)))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert a stored row into the API model, parsing enum labels and JSON
/// columns. Corrupt rows surface as database errors rather than panics.
pub fn model_to_test_case(m: test_case::Model) -> AppResult<models::TestCase> {
    let case_type = models::CaseType::parse(&m.case_type).ok_or_else(|| {
        AppError::Database(format!("Test case {} has unknown type '{}'", m.id, m.case_type))
    })?;
    let priority = models::CasePriority::parse(&m.priority).ok_or_else(|| {
        AppError::Database(format!(
            "Test case {} has unknown priority '{}'",
            m.id, m.priority
        ))
    })?;
    let status = CaseStatus::parse(&m.status).ok_or_else(|| {
        AppError::Database(format!("Test case {} has unknown status '{}'", m.id, m.status))
    })?;
    let last_execution_status = m
        .last_execution_status
        .as_deref()
        .map(|s| {
            ExecutionStatus::parse(s).ok_or_else(|| {
                AppError::Database(format!(
                    "Test case {} has unknown execution status '{}'",
                    m.id, s
                ))
            })
        })
        .transpose()?;

    Ok(models::TestCase {
        id: m.id,
        sequential_id: m.sequential_id,
        name: m.name,
        description: m.description,
        case_type,
        priority,
        status,
        steps: serde_json::from_value(m.steps)?,
        prerequisites: serde_json::from_value(m.prerequisites)?,
        assigned_to: m.assigned_to,
        created_by: Identity::from_json(&m.created_by)?,
        updated_by: m.updated_by.as_ref().map(Identity::from_json).transpose()?,
        last_executed_by: m
            .last_executed_by
            .as_ref()
            .map(Identity::from_json)
            .transpose()?,
        last_run: m.last_run,
        last_execution_status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}
