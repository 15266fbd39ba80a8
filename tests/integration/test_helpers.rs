//! Shared helpers for integration tests.

use tempfile::TempDir;
use uuid::Uuid;

use hybex_qa_lib::db::DbPool;
use hybex_qa_lib::models::{CasePriority, CaseType, Identity, NewTestCase, TestStep};

/// A migrated database backed by a temp directory. The directory is removed
/// when this struct drops, so keep it alive for the whole test.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

/// Create a fresh file-backed SQLite database and run all migrations.
///
/// A file-backed database is used instead of `sqlite::memory:` because the
/// connection pool would otherwise hand every connection its own empty
/// in-memory database.
pub async fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = DbPool::connect(&url).await.expect("failed to open database");
    pool.run_migrations().await.expect("failed to migrate");

    TestDb { pool, _dir: dir }
}

/// A fixed tester identity for stamping records.
pub fn tester() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Dana Tester".to_string(),
        email: "dana@example.com".to_string(),
    }
}

/// A complete, valid test case creation payload.
pub fn new_case(name: &str) -> NewTestCase {
    NewTestCase {
        name: name.to_string(),
        description: format!("{} description", name),
        case_type: CaseType::Functional,
        priority: CasePriority::Medium,
        steps: vec![TestStep {
            description: "Perform the action".to_string(),
            expected_result: "The expected outcome occurs".to_string(),
        }],
        prerequisites: vec![],
        assigned_to: "Dana Tester".to_string(),
        created_by: tester(),
    }
}
