//! Database queries for test plans.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::test_plan::{self, ActiveModel as TestPlanActiveModel, Entity as TestPlan};
use crate::error::{AppError, AppResult};
use crate::models::{self, Identity, NewTestPlan, PlanStatus, UpdateTestPlan};

use super::DbPool;

impl DbPool {
    /// Insert a new test plan with its embedded case specs.
    pub async fn insert_test_plan(&self, new: NewTestPlan) -> AppResult<models::TestPlan> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        let model = TestPlanActiveModel {
            id: Set(id),
            title: Set(new.title),
            description: Set(new.description),
            priority: Set(new.priority.as_str().to_string()),
            status: Set(new.status.as_str().to_string()),
            test_cases: Set(serde_json::to_value(&new.test_cases)?),
            created_by: Set(new.created_by.to_json()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert test plan: {}", e)))?;

        model_to_test_plan(result)
    }

    /// Get a single test plan by ID.
    pub async fn get_test_plan(&self, id: Uuid) -> AppResult<Option<models::TestPlan>> {
        let result = TestPlan::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test plan: {}", e)))?;

        result.map(model_to_test_plan).transpose()
    }

    /// List all test plans, newest-created-first.
    pub async fn list_test_plans(&self) -> AppResult<Vec<models::TestPlan>> {
        let rows = TestPlan::find()
            .order_by_desc(test_plan::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test plans: {}", e)))?;

        rows.into_iter().map(model_to_test_plan).collect()
    }

    /// Patch a test plan. A provided embedded case list replaces the stored
    /// one wholesale. Returns None when the plan does not exist.
    pub async fn update_test_plan(
        &self,
        id: Uuid,
        update: UpdateTestPlan,
    ) -> AppResult<Option<models::TestPlan>> {
        let existing = TestPlan::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test plan: {}", e)))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: TestPlanActiveModel = existing.into();
        if let Some(title) = update.title {
            active.title = Set(title);
        }
        if let Some(description) = update.description {
            active.description = Set(description);
        }
        if let Some(priority) = update.priority {
            active.priority = Set(priority.as_str().to_string());
        }
        if let Some(status) = update.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(test_cases) = update.test_cases {
            active.test_cases = Set(serde_json::to_value(&test_cases)?);
        }
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update test plan: {}", e)))?;

        model_to_test_plan(updated).map(Some)
    }

    /// Hard-delete a test plan. Returns false when nothing was deleted.
    pub async fn delete_test_plan(&self, id: Uuid) -> AppResult<bool> {
        let result = TestPlan::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test plan: {}", e)))?;

        Ok(result.rows_affected > 0)
    }
}

fn model_to_test_plan(m: test_plan::Model) -> AppResult<models::TestPlan> {
    let priority = models::CasePriority::parse(&m.priority).ok_or_else(|| {
        AppError::Database(format!(
            "Test plan {} has unknown priority '{}'",
            m.id, m.priority
        ))
    })?;
    let status = PlanStatus::parse(&m.status).ok_or_else(|| {
        AppError::Database(format!("Test plan {} has unknown status '{}'", m.id, m.status))
    })?;

    Ok(models::TestPlan {
        id: m.id,
        title: m.title,
        description: m.description,
        priority,
        status,
        test_cases: serde_json::from_value(m.test_cases)?,
        created_by: Identity::from_json(&m.created_by)?,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}
