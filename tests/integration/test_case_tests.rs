//! Integration tests for test case CRUD and display-ID allocation.

use uuid::Uuid;

use hybex_qa_lib::error::AppError;
use hybex_qa_lib::models::{CasePriority, CaseStatus, CaseType, TestCaseFilter, UpdateTestCase};
use hybex_qa_lib::services::test_cases;

use super::test_helpers::{new_case, setup_db, tester};

#[tokio::test]
async fn test_sequential_ids_start_at_one_and_increment() {
    let db = setup_db().await;

    let a = test_cases::create(&db.pool, new_case("First")).await.unwrap();
    let b = test_cases::create(&db.pool, new_case("Second")).await.unwrap();
    let c = test_cases::create(&db.pool, new_case("Third")).await.unwrap();

    assert_eq!(a.sequential_id, "TE/0001");
    assert_eq!(b.sequential_id, "TE/0002");
    assert_eq!(c.sequential_id, "TE/0003");
}

#[tokio::test]
async fn test_created_case_roundtrips_through_get() {
    let db = setup_db().await;

    let mut payload = new_case("Login happy path");
    payload.priority = CasePriority::Critical;
    payload.prerequisites = vec!["Account exists".to_string()];

    let created = test_cases::create(&db.pool, payload).await.unwrap();
    let fetched = test_cases::get(&db.pool, created.id).await.unwrap();

    assert_eq!(fetched.name, "Login happy path");
    assert_eq!(fetched.sequential_id, created.sequential_id);
    assert_eq!(fetched.priority, CasePriority::Critical);
    assert_eq!(fetched.status, CaseStatus::Pending);
    assert_eq!(fetched.prerequisites, vec!["Account exists".to_string()]);
    assert_eq!(fetched.steps, created.steps);
    assert_eq!(fetched.created_by.email, "dana@example.com");
    assert!(fetched.last_run.is_none());
    assert!(fetched.updated_by.is_none());
}

#[tokio::test]
async fn test_create_rejects_incomplete_payload() {
    let db = setup_db().await;

    let mut no_steps = new_case("No steps");
    no_steps.steps.clear();
    let err = test_cases::create(&db.pool, no_steps).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    // Nothing was persisted and no display ID was consumed
    let created = test_cases::create(&db.pool, new_case("Valid")).await.unwrap();
    assert_eq!(created.sequential_id, "TE/0001");
}

#[tokio::test]
async fn test_list_filters_are_conjunctive() {
    let db = setup_db().await;

    let mut security = new_case("Security scan");
    security.case_type = CaseType::Security;
    security.priority = CasePriority::High;
    test_cases::create(&db.pool, security).await.unwrap();

    let mut functional = new_case("Functional check");
    functional.priority = CasePriority::High;
    test_cases::create(&db.pool, functional).await.unwrap();

    let all = test_cases::list(&db.pool, &TestCaseFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let high_security = test_cases::list(
        &db.pool,
        &TestCaseFilter {
            status: None,
            case_type: Some("security".to_string()),
            priority: Some("high".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(high_security.len(), 1);
    assert_eq!(high_security[0].name, "Security scan");

    // Unknown label matches nothing rather than erroring
    let unknown = test_cases::list(
        &db.pool,
        &TestCaseFilter {
            status: Some("Exploded".to_string()),
            case_type: None,
            priority: None,
        },
    )
    .await
    .unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn test_update_merges_and_stamps_updater() {
    let db = setup_db().await;

    let created = test_cases::create(&db.pool, new_case("Original")).await.unwrap();

    let updater = tester();
    let updated = test_cases::update(
        &db.pool,
        created.id,
        UpdateTestCase {
            name: Some("Renamed".to_string()),
            priority: Some(CasePriority::Critical),
            updated_by: updater.clone(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.priority, CasePriority::Critical);
    // Untouched fields survive the merge
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.sequential_id, created.sequential_id);
    assert_eq!(updated.updated_by.unwrap().id, updater.id);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_missing_case_is_not_found() {
    let db = setup_db().await;

    let err = test_cases::update(
        &db.pool,
        Uuid::new_v4(),
        UpdateTestCase {
            name: Some("Ghost".to_string()),
            updated_by: tester(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_removes_case() {
    let db = setup_db().await;

    let created = test_cases::create(&db.pool, new_case("Doomed")).await.unwrap();
    test_cases::delete(&db.pool, created.id).await.unwrap();

    let err = test_cases::get(&db.pool, created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = test_cases::delete(&db.pool, created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let db = setup_db().await;

    let (a, b, c) = tokio::join!(
        test_cases::create(&db.pool, new_case("A")),
        test_cases::create(&db.pool, new_case("B")),
        test_cases::create(&db.pool, new_case("C")),
    );

    let mut ids = vec![
        a.unwrap().sequential_id,
        b.unwrap().sequential_id,
        c.unwrap().sequential_id,
    ];
    ids.sort();
    assert_eq!(ids, vec!["TE/0001", "TE/0002", "TE/0003"]);
}
