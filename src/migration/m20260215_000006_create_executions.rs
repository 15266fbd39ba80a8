//! Migration: Create executions table.
//!
//! Deliberately no foreign key to test_cases: deleting a test case leaves its
//! executions orphaned, matching the documented non-goal of referential integrity.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Executions::Table)
                    .col(
                        ColumnDef::new(Executions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Executions::TestId).uuid().not_null())
                    .col(ColumnDef::new(Executions::Status).string().not_null())
                    .col(ColumnDef::new(Executions::Observations).string())
                    .col(ColumnDef::new(Executions::ExecutedBy).json().not_null())
                    .col(ColumnDef::new(Executions::ProjectId).uuid())
                    .col(ColumnDef::new(Executions::TestPlanId).uuid())
                    .col(
                        ColumnDef::new(Executions::ExecutedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Executions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_executions_test_id")
                    .table(Executions::Table)
                    .col(Executions::TestId)
                    .to_owned(),
            )
            .await?;

        // Dashboard pulls the most recent executions
        manager
            .create_index(
                Index::create()
                    .name("idx_executions_executed_at")
                    .table(Executions::Table)
                    .col(Executions::ExecutedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_executions_test_plan_id")
                    .table(Executions::Table)
                    .col(Executions::TestPlanId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Executions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Executions {
    Table,
    Id,
    TestId,
    Status,
    Observations,
    ExecutedBy,
    ProjectId,
    TestPlanId,
    ExecutedAt,
    CreatedAt,
}
