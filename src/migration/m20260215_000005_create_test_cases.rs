//! Migration: Create test_cases table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestCases::Table)
                    .col(
                        ColumnDef::new(TestCases::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TestCases::SequentialId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TestCases::Name).string().not_null())
                    .col(ColumnDef::new(TestCases::Description).string().not_null())
                    .col(ColumnDef::new(TestCases::CaseType).string().not_null())
                    .col(ColumnDef::new(TestCases::Priority).string().not_null())
                    .col(ColumnDef::new(TestCases::Status).string().not_null())
                    .col(ColumnDef::new(TestCases::Steps).json().not_null())
                    .col(ColumnDef::new(TestCases::Prerequisites).json().not_null())
                    .col(ColumnDef::new(TestCases::AssignedTo).string().not_null())
                    .col(ColumnDef::new(TestCases::CreatedBy).json().not_null())
                    .col(ColumnDef::new(TestCases::UpdatedBy).json())
                    .col(ColumnDef::new(TestCases::LastExecutedBy).json())
                    .col(ColumnDef::new(TestCases::LastRun).timestamp_with_time_zone())
                    .col(ColumnDef::new(TestCases::LastExecutionStatus).string())
                    .col(
                        ColumnDef::new(TestCases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestCases::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always newest-created-first
        manager
            .create_index(
                Index::create()
                    .name("idx_test_cases_created_at")
                    .table(TestCases::Table)
                    .col(TestCases::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_cases_status")
                    .table(TestCases::Table)
                    .col(TestCases::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestCases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestCases {
    Table,
    Id,
    SequentialId,
    Name,
    Description,
    CaseType,
    Priority,
    Status,
    Steps,
    Prerequisites,
    AssignedTo,
    CreatedBy,
    UpdatedBy,
    LastExecutedBy,
    LastRun,
    LastExecutionStatus,
    CreatedAt,
    UpdatedAt,
}
