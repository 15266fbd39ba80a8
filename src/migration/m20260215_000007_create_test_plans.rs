//! Migration: Create test_plans table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestPlans::Table)
                    .col(
                        ColumnDef::new(TestPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestPlans::Title).string().not_null())
                    .col(ColumnDef::new(TestPlans::Description).string().not_null())
                    .col(ColumnDef::new(TestPlans::Priority).string().not_null())
                    .col(ColumnDef::new(TestPlans::Status).string().not_null())
                    .col(ColumnDef::new(TestPlans::TestCases).json().not_null())
                    .col(ColumnDef::new(TestPlans::CreatedBy).json().not_null())
                    .col(
                        ColumnDef::new(TestPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestPlans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestPlans {
    Table,
    Id,
    Title,
    Description,
    Priority,
    Status,
    TestCases,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
