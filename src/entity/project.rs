//! Project entity carrying the execution rollup statistics.
//!
//! Invariant: `pass_rate == pass_count / execution_count * 100`. The rollup
//! columns are only mutated through a single-statement atomic update so the
//! invariant holds under concurrent execution recording.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub total_test_cases: i32,
    pub execution_count: i32,
    pub pass_count: i32,
    pub pass_rate: f64,
    pub last_execution: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
