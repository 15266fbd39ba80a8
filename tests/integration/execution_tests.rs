//! Integration tests for execution recording and its side effects.

use uuid::Uuid;

use hybex_qa_lib::error::AppError;
use hybex_qa_lib::models::{CaseStatus, ExecutionStatus, NewExecution, NewProject};
use hybex_qa_lib::services::{executions, test_cases};

use super::test_helpers::{new_case, setup_db, tester};

fn passing_execution(test_id: Uuid) -> NewExecution {
    NewExecution {
        test_id,
        status: ExecutionStatus::Passed,
        observations: None,
        executed_by: tester(),
        project_id: None,
        test_plan_id: None,
    }
}

#[tokio::test]
async fn test_record_patches_test_case_run_fields() {
    let db = setup_db().await;
    let case = test_cases::create(&db.pool, new_case("Checkout")).await.unwrap();

    let execution = executions::record(&db.pool, passing_execution(case.id))
        .await
        .unwrap();
    assert_eq!(execution.test_id, case.id);
    assert_eq!(execution.status, ExecutionStatus::Passed);

    let patched = test_cases::get(&db.pool, case.id).await.unwrap();
    assert_eq!(patched.status, CaseStatus::Passed);
    assert_eq!(patched.last_run, Some(execution.executed_at));
    assert_eq!(patched.last_execution_status, Some(ExecutionStatus::Passed));
    assert_eq!(
        patched.last_executed_by.unwrap().id,
        execution.executed_by.id
    );
}

#[tokio::test]
async fn test_failed_execution_requires_observations() {
    let db = setup_db().await;
    let case = test_cases::create(&db.pool, new_case("Flaky")).await.unwrap();

    let mut failed = passing_execution(case.id);
    failed.status = ExecutionStatus::Failed;
    failed.observations = Some("   ".to_string());

    let err = executions::record(&db.pool, failed).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    // Rejected before any write: no history, case untouched
    let history = executions::history(&db.pool, case.id).await.unwrap();
    assert!(history.is_empty());
    let untouched = test_cases::get(&db.pool, case.id).await.unwrap();
    assert_eq!(untouched.status, CaseStatus::Pending);

    let mut failed = passing_execution(case.id);
    failed.status = ExecutionStatus::Failed;
    failed.observations = Some("Button missing on step 2".to_string());
    executions::record(&db.pool, failed).await.unwrap();

    let patched = test_cases::get(&db.pool, case.id).await.unwrap();
    assert_eq!(patched.status, CaseStatus::Failed);
}

#[tokio::test]
async fn test_record_against_missing_test_is_not_found() {
    let db = setup_db().await;

    let err = executions::record(&db.pool, passing_execution(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_history_is_newest_first() {
    let db = setup_db().await;
    let case = test_cases::create(&db.pool, new_case("Repeated")).await.unwrap();

    executions::record(&db.pool, passing_execution(case.id)).await.unwrap();
    let mut blocked = passing_execution(case.id);
    blocked.status = ExecutionStatus::Blocked;
    executions::record(&db.pool, blocked).await.unwrap();

    let history = executions::history(&db.pool, case.id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].executed_at >= history[1].executed_at);
    assert_eq!(history[0].status, ExecutionStatus::Blocked);
}

#[tokio::test]
async fn test_project_rollup_tracks_pass_rate() {
    let db = setup_db().await;
    let case = test_cases::create(&db.pool, new_case("Rollup")).await.unwrap();
    let project = db
        .pool
        .insert_project(NewProject {
            name: "Mobile app".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let mut passed = passing_execution(case.id);
    passed.project_id = Some(project.id);
    executions::record(&db.pool, passed).await.unwrap();

    let mut failed = passing_execution(case.id);
    failed.status = ExecutionStatus::Failed;
    failed.observations = Some("Crash on launch".to_string());
    failed.project_id = Some(project.id);
    executions::record(&db.pool, failed).await.unwrap();

    let rolled = db.pool.get_project(project.id).await.unwrap().unwrap();
    assert_eq!(rolled.execution_count, 2);
    assert_eq!(rolled.pass_count, 1);
    assert_eq!(rolled.pass_rate, 50.0);
    assert!(rolled.last_execution.is_some());
}

#[tokio::test]
async fn test_missing_project_does_not_fail_recording() {
    let db = setup_db().await;
    let case = test_cases::create(&db.pool, new_case("Orphan project")).await.unwrap();

    let mut execution = passing_execution(case.id);
    execution.project_id = Some(Uuid::new_v4());

    // Rollup failure is logged and swallowed; the execution still lands
    executions::record(&db.pool, execution).await.unwrap();

    let history = executions::history(&db.pool, case.id).await.unwrap();
    assert_eq!(history.len(), 1);
}
