//! Access request entity: a pending self-service signup awaiting admin review.
//!
//! Status is a one-way tri-state: pending -> approved or pending -> rejected,
//! both terminal.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "access_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Credential captured at signup, stored hashed and reused on approval.
    pub password_hash: String,
    pub status: String,
    pub reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub processed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
