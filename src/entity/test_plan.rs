//! Test plan entity: a coarse-grained plan owning embedded lightweight case specs.
//!
//! The embedded specs live in a JSON column and are replaced wholesale on edit;
//! they are not the same entity as [`super::test_case`].

use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    #[sea_orm(column_type = "Json")]
    pub test_cases: JsonValue,
    #[sea_orm(column_type = "Json")]
    pub created_by: JsonValue,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
