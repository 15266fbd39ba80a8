//! Integration tests for the access request approval workflow.

use uuid::Uuid;

use hybex_qa_lib::error::AppError;
use hybex_qa_lib::models::{NewAccessRequest, RequestStatus};
use hybex_qa_lib::services::{access_requests, auth};

use super::test_helpers::setup_db;

fn request_for(email: &str) -> NewAccessRequest {
    NewAccessRequest {
        name: "Sam Candidate".to_string(),
        email: email.to_string(),
        password: "a-long-password".to_string(),
    }
}

#[tokio::test]
async fn test_submit_creates_pending_request() {
    let db = setup_db().await;

    let request = access_requests::submit(&db.pool, request_for("sam@example.com"))
        .await
        .unwrap();

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.email, "sam@example.com");
    assert!(request.processed_at.is_none());
}

#[tokio::test]
async fn test_submit_validates_input() {
    let db = setup_db().await;

    let mut bad_email = request_for("not-an-email");
    bad_email.email = "not-an-email".to_string();
    let err = access_requests::submit(&db.pool, bad_email).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let mut weak = request_for("sam@example.com");
    weak.password = "short".to_string();
    let err = access_requests::submit(&db.pool, weak).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_duplicate_pending_request_is_conflict() {
    let db = setup_db().await;

    access_requests::submit(&db.pool, request_for("sam@example.com"))
        .await
        .unwrap();
    let err = access_requests::submit(&db.pool, request_for("sam@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_approve_creates_account_with_submitted_credentials() {
    let db = setup_db().await;

    let request = access_requests::submit(&db.pool, request_for("sam@example.com"))
        .await
        .unwrap();

    let (processed, user) = access_requests::approve(&db.pool, request.id).await.unwrap();
    assert_eq!(processed.status, RequestStatus::Approved);
    assert!(processed.processed_at.is_some());
    assert_eq!(user.email, "sam@example.com");
    assert_eq!(user.role, "tester");
    assert!(user.is_active);

    // The credential captured at submission time works for sign-in
    let signed_in = auth::sign_in(&db.pool, "sam@example.com", "a-long-password")
        .await
        .unwrap();
    assert_eq!(signed_in.id, user.id);
    assert!(signed_in.last_login_at.is_some());
}

#[tokio::test]
async fn test_processed_request_cannot_be_processed_again() {
    let db = setup_db().await;

    let request = access_requests::submit(&db.pool, request_for("sam@example.com"))
        .await
        .unwrap();
    access_requests::approve(&db.pool, request.id).await.unwrap();

    let err = access_requests::approve(&db.pool, request.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let err = access_requests::reject(&db.pool, request.id, None).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_approve_with_taken_email_leaves_request_pending() {
    let db = setup_db().await;

    auth::create_account(&db.pool, "Sam", "sam@example.com", "tester", "a-long-password")
        .await
        .unwrap();

    let request = access_requests::submit(&db.pool, request_for("sam@example.com"))
        .await
        .unwrap();
    let err = access_requests::approve(&db.pool, request.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let pending = access_requests::list(&db.pool, Some(RequestStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, request.id);
}

#[tokio::test]
async fn test_reject_stores_reason_verbatim() {
    let db = setup_db().await;

    let request = access_requests::submit(&db.pool, request_for("sam@example.com"))
        .await
        .unwrap();
    let rejected = access_requests::reject(
        &db.pool,
        request.id,
        Some("We are not onboarding contractors right now".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(rejected.status, RequestStatus::Rejected);
    assert_eq!(
        rejected.reason.as_deref(),
        Some("We are not onboarding contractors right now")
    );
    assert!(rejected.processed_at.is_some());

    // Rejection does not create an account
    let err = auth::sign_in(&db.pool, "sam@example.com", "a-long-password")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn test_processing_unknown_request_is_not_found() {
    let db = setup_db().await;

    let err = access_requests::approve(&db.pool, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
