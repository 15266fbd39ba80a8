//! Database queries for projects and their execution rollup.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseBackend, EntityTrait, Set, Statement};
use uuid::Uuid;

use crate::entity::project::{self, ActiveModel as ProjectActiveModel, Entity as Project};
use crate::error::{AppError, AppResult};
use crate::models::{self, NewProject, UpdateProject};

use super::DbPool;

impl DbPool {
    /// Insert a new project with a zeroed rollup.
    pub async fn insert_project(&self, new: NewProject) -> AppResult<models::Project> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        let model = ProjectActiveModel {
            id: Set(id),
            name: Set(new.name),
            description: Set(new.description),
            total_test_cases: Set(0),
            execution_count: Set(0),
            pass_count: Set(0),
            pass_rate: Set(0.0),
            last_execution: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert project: {}", e)))?;

        Ok(model_to_project(result))
    }

    /// Get a single project by ID.
    pub async fn get_project(&self, id: Uuid) -> AppResult<Option<models::Project>> {
        let result = Project::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get project: {}", e)))?;

        Ok(result.map(model_to_project))
    }

    /// List all projects.
    pub async fn list_projects(&self) -> AppResult<Vec<models::Project>> {
        let rows = Project::find()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list projects: {}", e)))?;

        Ok(rows.into_iter().map(model_to_project).collect())
    }

    /// Patch project metadata. Returns None when the project does not exist.
    pub async fn update_project(
        &self,
        id: Uuid,
        update: UpdateProject,
    ) -> AppResult<Option<models::Project>> {
        let existing = Project::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get project: {}", e)))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: ProjectActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(total) = update.total_test_cases {
            active.total_test_cases = Set(total);
        }
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update project: {}", e)))?;

        Ok(Some(model_to_project(updated)))
    }

    /// Fold one recorded execution into the project rollup.
    ///
    /// Counters, the conditional pass count, and the recomputed pass rate are
    /// all applied in one UPDATE so concurrent recorders cannot lose updates.
    /// SQLite evaluates SET expressions against the pre-update row, hence the
    /// `+ 1` in the pass-rate denominator.
    pub async fn apply_execution_to_rollup(
        &self,
        project_id: Uuid,
        passed: bool,
        executed_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let pass_delta: i32 = if passed { 1 } else { 0 };

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE projects SET \
                execution_count = execution_count + 1, \
                pass_count = pass_count + ?, \
                pass_rate = (pass_count + ?) * 100.0 / (execution_count + 1), \
                last_execution = ?, \
                updated_at = ? \
             WHERE id = ? \
             RETURNING execution_count",
            [
                pass_delta.into(),
                pass_delta.into(),
                executed_at.into(),
                Utc::now().into(),
                project_id.into(),
            ],
        );

        let row = self
            .connection()
            .query_one_raw(stmt)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update project rollup: {}", e)))?;

        if row.is_none() {
            return Err(AppError::NotFound("Project".to_string()));
        }

        Ok(())
    }
}

fn model_to_project(m: project::Model) -> models::Project {
    models::Project {
        id: m.id,
        name: m.name,
        description: m.description,
        total_test_cases: m.total_test_cases,
        execution_count: m.execution_count,
        pass_count: m.pass_count,
        pass_rate: m.pass_rate,
        last_execution: m.last_execution,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
