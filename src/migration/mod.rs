//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260215_000001_create_counters;
mod m20260215_000002_create_users;
mod m20260215_000003_create_access_requests;
mod m20260215_000004_create_projects;
mod m20260215_000005_create_test_cases;
mod m20260215_000006_create_executions;
mod m20260215_000007_create_test_plans;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260215_000001_create_counters::Migration),
            Box::new(m20260215_000002_create_users::Migration),
            Box::new(m20260215_000003_create_access_requests::Migration),
            Box::new(m20260215_000004_create_projects::Migration),
            Box::new(m20260215_000005_create_test_cases::Migration),
            Box::new(m20260215_000006_create_executions::Migration),
            Box::new(m20260215_000007_create_test_plans::Migration),
        ]
    }
}
