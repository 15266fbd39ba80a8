//! Execution entity representing one recorded run of a test case.
//!
//! Executions are immutable once created and are never deleted by the
//! application. `test_id` is not a foreign key: deleting a test case leaves
//! its executions orphaned, which is accepted behavior.

use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "executions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub test_id: Uuid,
    pub status: String,
    pub observations: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub executed_by: JsonValue,
    pub project_id: Option<Uuid>,
    pub test_plan_id: Option<Uuid>,
    pub executed_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
