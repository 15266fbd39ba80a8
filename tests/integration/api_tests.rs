//! End-to-end API tests over the full Actix app.

use actix_web::{App, test, web};
use serde_json::json;

use hybex_qa_lib::api;
use hybex_qa_lib::auth::AdminKey;
use hybex_qa_lib::db::DbPool;
use hybex_qa_lib::services::auth;

use super::test_helpers::setup_db;

const TEST_ADMIN_KEY: &str = "integration-test-admin-key";

/// Build the API service exactly as main.rs wires it, minus CORS.
macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new(AdminKey::new(Some(
                    TEST_ADMIN_KEY.to_string(),
                ))))
                .service(
                    web::scope("/api/v1")
                        .configure(api::configure_health_routes)
                        .configure(api::configure_auth_routes)
                        .configure(api::configure_test_case_routes)
                        .configure(api::configure_execution_routes)
                        .configure(api::configure_test_plan_routes)
                        .configure(api::configure_project_routes)
                        .configure(api::configure_stats_routes)
                        .configure(api::configure_access_request_routes)
                        .configure(api::configure_admin_routes),
                ),
        )
        .await
    };
}

fn case_payload(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "Created through the API",
        "type": "functional",
        "priority": "high",
        "steps": [
            {"description": "Do the thing", "expectedResult": "It works"}
        ],
        "assignedTo": "Dana",
        "createdBy": {
            "id": "9b2f1c52-57b4-4de2-8b5c-6a4b1a1a2b3c",
            "name": "Dana",
            "email": "dana@example.com"
        }
    })
}

#[actix_web::test]
async fn test_health_endpoint() {
    let db = setup_db().await;
    let app = test_app!(db.pool);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request())
        .await;
    assert!(resp.status().is_success());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/ready").to_request())
        .await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_create_and_fetch_test_case_over_http() {
    let db = setup_db().await;
    let app = test_app!(db.pool);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tests")
            .set_json(case_payload("API case"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["sequentialId"], "TE/0001");
    assert_eq!(body["type"], "functional");
    assert_eq!(body["status"], "Pending");

    let id = body["id"].as_str().unwrap().to_string();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/tests/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);

    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched["name"], "API case");
    assert_eq!(fetched["steps"][0]["expectedResult"], "It works");
}

#[actix_web::test]
async fn test_invalid_payloads_map_to_error_envelope() {
    let db = setup_db().await;
    let app = test_app!(db.pool);

    let mut incomplete = case_payload("No steps");
    incomplete["steps"] = json!([]);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tests")
            .set_json(incomplete)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_INPUT");
    assert!(body["message"].as_str().unwrap().contains("step"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/tests/{}", uuid::Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_execution_recording_over_http() {
    let db = setup_db().await;
    let app = test_app!(db.pool);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tests")
            .set_json(case_payload("Runs"))
            .to_request(),
    )
    .await;
    let case: serde_json::Value = test::read_body_json(resp).await;
    let case_id = case["id"].as_str().unwrap().to_string();

    // Failed execution without observations is rejected
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/executions")
            .set_json(json!({
                "testId": case_id,
                "status": "Failed",
                "executedBy": case["createdBy"],
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 400);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/executions")
            .set_json(json!({
                "testId": case_id,
                "status": "Passed",
                "executedBy": case["createdBy"],
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);

    // The owning case now reflects the outcome
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/tests/{}", case_id))
            .to_request(),
    )
    .await;
    let patched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(patched["status"], "Passed");
    assert_eq!(patched["lastExecutionStatus"], "Passed");
    assert!(patched["lastRun"].is_string());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/stats/dashboard")
            .to_request(),
    )
    .await;
    let stats: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(stats["totalTests"], 1);
    assert_eq!(stats["totalExecutions"], 1);
    assert_eq!(stats["recentExecutions"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_admin_endpoints_require_the_admin_key() {
    let db = setup_db().await;
    let app = test_app!(db.pool);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/access-requests")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/access-requests")
            .insert_header(("X-Admin-Key", "wrong-key"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/access-requests")
            .insert_header(("X-Admin-Key", TEST_ADMIN_KEY))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn test_signup_approval_and_login_flow() {
    let db = setup_db().await;
    let app = test_app!(db.pool);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/access-requests")
            .set_json(json!({
                "name": "Sam",
                "email": "sam@example.com",
                "password": "a-long-password"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);
    let request: serde_json::Value = test::read_body_json(resp).await;
    let request_id = request["id"].as_str().unwrap().to_string();

    // Login fails while the request is still pending
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "sam@example.com", "password": "a-long-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/access-requests/{}/approve", request_id))
            .insert_header(("X-Admin-Key", TEST_ADMIN_KEY))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);
    let approved: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(approved["request"]["status"], "approved");
    assert_eq!(approved["user"]["email"], "sam@example.com");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "sam@example.com", "password": "a-long-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);
    let user: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(user["role"], "tester");
    assert!(user.get("passwordHash").is_none());
}

#[actix_web::test]
async fn test_reset_wipes_data_and_restarts_numbering() {
    let db = setup_db().await;
    auth::ensure_master_account(&db.pool).await.unwrap();
    let app = test_app!(db.pool);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tests")
            .set_json(case_payload("Doomed"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);

    // One pending and one rejected signup, to check what the reset keeps
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/access-requests")
            .set_json(json!({
                "name": "Waiting",
                "email": "waiting@example.com",
                "password": "a-long-password"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/access-requests")
            .set_json(json!({
                "name": "Turned away",
                "email": "rejected@example.com",
                "password": "a-long-password"
            }))
            .to_request(),
    )
    .await;
    let rejected: serde_json::Value = test::read_body_json(resp).await;
    let rejected_id = rejected["id"].as_str().unwrap().to_string();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/access-requests/{}/reject", rejected_id))
            .insert_header(("X-Admin-Key", TEST_ADMIN_KEY))
            .set_json(json!({"reason": "No seats left"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);

    // Wrong confirmation phrase is rejected
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/reset")
            .insert_header(("X-Admin-Key", TEST_ADMIN_KEY))
            .set_json(json!({
                "email": auth::MASTER_ADMIN_EMAIL,
                "password": auth::MASTER_ADMIN_PASSWORD,
                "confirmation": "reset all data"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 400);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/reset")
            .insert_header(("X-Admin-Key", TEST_ADMIN_KEY))
            .set_json(json!({
                "email": auth::MASTER_ADMIN_EMAIL,
                "password": auth::MASTER_ADMIN_PASSWORD,
                "confirmation": "RESET ALL DATA"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 204);

    // Data is gone, accounts survive, numbering restarts
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/tests").to_request(),
    )
    .await;
    let cases: serde_json::Value = test::read_body_json(resp).await;
    assert!(cases.as_array().unwrap().is_empty());

    // The pending signup is still waiting for review; the processed one is gone
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/access-requests")
            .insert_header(("X-Admin-Key", TEST_ADMIN_KEY))
            .to_request(),
    )
    .await;
    let requests: serde_json::Value = test::read_body_json(resp).await;
    let requests = requests.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["email"], "waiting@example.com");
    assert_eq!(requests[0]["status"], "pending");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({
                "email": auth::MASTER_ADMIN_EMAIL,
                "password": auth::MASTER_ADMIN_PASSWORD
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tests")
            .set_json(case_payload("Fresh start"))
            .to_request(),
    )
    .await;
    let fresh: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fresh["sequentialId"], "TE/0001");
}
