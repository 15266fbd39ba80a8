//! Migration: Create access_requests table.
//!
//! No uniqueness constraint on email: the at-most-one-pending rule is checked
//! at request creation time, matching the documented gap.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessRequests::Table)
                    .col(
                        ColumnDef::new(AccessRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessRequests::Name).string().not_null())
                    .col(ColumnDef::new(AccessRequests::Email).string().not_null())
                    .col(
                        ColumnDef::new(AccessRequests::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AccessRequests::Status).string().not_null())
                    .col(ColumnDef::new(AccessRequests::Reason).string())
                    .col(
                        ColumnDef::new(AccessRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AccessRequests::ProcessedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_access_requests_email_status")
                    .table(AccessRequests::Table)
                    .col(AccessRequests::Email)
                    .col(AccessRequests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AccessRequests {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Status,
    Reason,
    CreatedAt,
    ProcessedAt,
}
