//! Database module providing connection management, migrations, and queries.

pub mod access_requests;
pub mod counters;
pub mod executions;
pub mod projects;
pub mod test_cases;
pub mod test_plans;
pub mod users;

use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};
use sea_orm_migration::MigratorTrait;

use crate::entity;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;
use crate::models::RequestStatus;

/// Database connection pool wrapper around the SeaORM connection.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Open a connection pool for the given database URL.
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let conn = Database::connect(database_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Get access to the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Run all pending migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Failed to run migrations: {}", e)))?;
        Ok(())
    }

    /// Wipe all QA data (test cases, executions, plans, projects, counters,
    /// processed access requests). User accounts and pending access requests
    /// are kept: a signup still awaiting review must stay actionable after a
    /// reset. Only reachable through the guarded admin reset.
    pub async fn reset_qa_data(&self) -> AppResult<()> {
        entity::execution::Entity::delete_many()
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear executions: {}", e)))?;
        entity::test_case::Entity::delete_many()
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear test cases: {}", e)))?;
        entity::test_plan::Entity::delete_many()
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear test plans: {}", e)))?;
        entity::project::Entity::delete_many()
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear projects: {}", e)))?;
        entity::counter::Entity::delete_many()
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear counters: {}", e)))?;
        entity::access_request::Entity::delete_many()
            .filter(entity::access_request::Column::Status.ne(RequestStatus::Pending.as_str()))
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear access requests: {}", e)))?;

        Ok(())
    }
}
