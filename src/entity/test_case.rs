//! Test case entity representing one reusable test definition.
//!
//! `sequential_id` is assigned once at creation and never changes. The
//! identity columns hold denormalized snapshots (`{id, name, email}` JSON)
//! copied at write time, not live references; renaming a user does not
//! rewrite history.

use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_cases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub sequential_id: String,
    pub name: String,
    pub description: String,
    pub case_type: String,
    pub priority: String,
    /// Starts as "Pending"; afterwards overwritten by the latest execution outcome.
    pub status: String,
    #[sea_orm(column_type = "Json")]
    pub steps: JsonValue,
    #[sea_orm(column_type = "Json")]
    pub prerequisites: JsonValue,
    pub assigned_to: String,
    #[sea_orm(column_type = "Json")]
    pub created_by: JsonValue,
    #[sea_orm(column_type = "Json", nullable)]
    pub updated_by: Option<JsonValue>,
    #[sea_orm(column_type = "Json", nullable)]
    pub last_executed_by: Option<JsonValue>,
    pub last_run: Option<DateTimeUtc>,
    pub last_execution_status: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
