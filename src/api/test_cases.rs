//! Test case API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{NewTestCase, TestCaseFilter, UpdateTestCase};
use crate::services::{executions as execution_service, test_cases};

/// Create a test case.
///
/// Allocates the next sequential display ID (`TE/0001`, `TE/0002`, ...) and
/// stores the case with status `Pending` and no run history.
#[utoipa::path(
    post,
    path = "/api/v1/tests",
    tag = "Test Cases",
    request_body = NewTestCase,
    responses(
        (status = 201, description = "Test case created", body = crate::models::TestCase),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_case(
    pool: web::Data<DbPool>,
    body: web::Json<NewTestCase>,
) -> AppResult<HttpResponse> {
    let created = test_cases::create(pool.get_ref(), body.into_inner()).await?;
    info!("Test case created: {} ({})", created.sequential_id, created.id);
    Ok(HttpResponse::Created().json(created))
}

/// List test cases, newest first, with optional equality filters.
#[utoipa::path(
    get,
    path = "/api/v1/tests",
    tag = "Test Cases",
    params(
        ("status" = Option<String>, Query, description = "Filter by status label"),
        ("type" = Option<String>, Query, description = "Filter by case type label"),
        ("priority" = Option<String>, Query, description = "Filter by priority label")
    ),
    responses(
        (status = 200, description = "List of test cases", body = Vec<crate::models::TestCase>),
    )
)]
pub async fn list_test_cases(
    pool: web::Data<DbPool>,
    query: web::Query<TestCaseFilter>,
) -> AppResult<HttpResponse> {
    let cases = test_cases::list(pool.get_ref(), &query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(cases))
}

/// Get a single test case.
#[utoipa::path(
    get,
    path = "/api/v1/tests/{test_id}",
    tag = "Test Cases",
    params(("test_id" = Uuid, Path, description = "Test case ID")),
    responses(
        (status = 200, description = "Test case", body = crate::models::TestCase),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let case = test_cases::get(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(case))
}

/// Patch a test case.
///
/// Provided fields overwrite stored ones; omitted fields are untouched. The
/// updater identity is stamped on every successful patch.
#[utoipa::path(
    patch,
    path = "/api/v1/tests/{test_id}",
    tag = "Test Cases",
    params(("test_id" = Uuid, Path, description = "Test case ID")),
    request_body = UpdateTestCase,
    responses(
        (status = 200, description = "Updated test case", body = crate::models::TestCase),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTestCase>,
) -> AppResult<HttpResponse> {
    let updated = test_cases::update(pool.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a test case.
#[utoipa::path(
    delete,
    path = "/api/v1/tests/{test_id}",
    tag = "Test Cases",
    params(("test_id" = Uuid, Path, description = "Test case ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    test_cases::delete(pool.get_ref(), id).await?;
    info!("Test case deleted: {}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Get the execution history of a test case, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/tests/{test_id}/executions",
    tag = "Test Cases",
    params(("test_id" = Uuid, Path, description = "Test case ID")),
    responses(
        (status = 200, description = "Executions for this test case", body = Vec<crate::models::Execution>),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_case_executions(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let executions = execution_service::history(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(executions))
}

/// Configure test case routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tests")
            .route(web::get().to(list_test_cases))
            .route(web::post().to(create_test_case)),
    )
    .service(
        web::resource("/tests/{test_id}")
            .route(web::get().to(get_test_case))
            .route(web::patch().to(update_test_case))
            .route(web::delete().to(delete_test_case)),
    )
    .service(
        web::resource("/tests/{test_id}/executions").route(web::get().to(get_test_case_executions)),
    );
}
