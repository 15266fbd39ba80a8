//! Database queries for execution records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::entity::execution::{self, ActiveModel as ExecutionActiveModel, Entity as Execution};
use crate::error::{AppError, AppResult};
use crate::models::{self, ExecutionStatus, Identity, NewExecution};

use super::DbPool;

impl DbPool {
    /// Insert a new execution record. Validation has already happened in the
    /// recorder service; this is a plain append.
    pub async fn insert_execution(
        &self,
        new: &NewExecution,
        executed_at: DateTime<Utc>,
    ) -> AppResult<models::Execution> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        let model = ExecutionActiveModel {
            id: Set(id),
            test_id: Set(new.test_id),
            status: Set(new.status.as_str().to_string()),
            observations: Set(new.observations.clone()),
            executed_by: Set(new.executed_by.to_json()),
            project_id: Set(new.project_id),
            test_plan_id: Set(new.test_plan_id),
            executed_at: Set(executed_at),
            created_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert execution: {}", e)))?;

        model_to_execution(result)
    }

    /// Count all executions.
    pub async fn count_executions(&self) -> AppResult<i64> {
        let count = Execution::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count executions: {}", e)))?;

        Ok(count as i64)
    }

    /// Get the most recent executions, newest first.
    pub async fn recent_executions(&self, limit: u64) -> AppResult<Vec<models::Execution>> {
        let rows = Execution::find()
            .order_by_desc(execution::Column::ExecutedAt)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list executions: {}", e)))?;

        rows.into_iter().map(model_to_execution).collect()
    }

    /// Get all executions recorded against a test case, newest first.
    pub async fn executions_by_test(&self, test_id: Uuid) -> AppResult<Vec<models::Execution>> {
        let rows = Execution::find()
            .filter(execution::Column::TestId.eq(test_id))
            .order_by_desc(execution::Column::ExecutedAt)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to list executions by test: {}", e))
            })?;

        rows.into_iter().map(model_to_execution).collect()
    }

    /// Get all executions tagged with a test plan, newest first.
    pub async fn executions_by_plan(&self, plan_id: Uuid) -> AppResult<Vec<models::Execution>> {
        let rows = Execution::find()
            .filter(execution::Column::TestPlanId.eq(plan_id))
            .order_by_desc(execution::Column::ExecutedAt)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to list executions by plan: {}", e))
            })?;

        rows.into_iter().map(model_to_execution).collect()
    }
}

/// Convert a stored row into the API model.
pub fn model_to_execution(m: execution::Model) -> AppResult<models::Execution> {
    let status = ExecutionStatus::parse(&m.status).ok_or_else(|| {
        AppError::Database(format!("Execution {} has unknown status '{}'", m.id, m.status))
    })?;

    Ok(models::Execution {
        id: m.id,
        test_id: m.test_id,
        status,
        observations: m.observations,
        executed_by: Identity::from_json(&m.executed_by)?,
        project_id: m.project_id,
        test_plan_id: m.test_plan_id,
        executed_at: m.executed_at,
        created_at: m.created_at,
    })
}
