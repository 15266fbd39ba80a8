//! Test plan API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{NewTestPlan, UpdateTestPlan};
use crate::services::{stats, test_plans};

/// Create a test plan with its embedded case specs.
#[utoipa::path(
    post,
    path = "/api/v1/test-plans",
    tag = "Test Plans",
    request_body = NewTestPlan,
    responses(
        (status = 201, description = "Test plan created", body = crate::models::TestPlan),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_plan(
    pool: web::Data<DbPool>,
    body: web::Json<NewTestPlan>,
) -> AppResult<HttpResponse> {
    let created = test_plans::create(pool.get_ref(), body.into_inner()).await?;
    info!("Test plan created: {}", created.id);
    Ok(HttpResponse::Created().json(created))
}

/// List test plans, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/test-plans",
    tag = "Test Plans",
    responses(
        (status = 200, description = "List of test plans", body = Vec<crate::models::TestPlan>),
    )
)]
pub async fn list_test_plans(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let plans = test_plans::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(plans))
}

/// Get a single test plan.
#[utoipa::path(
    get,
    path = "/api/v1/test-plans/{plan_id}",
    tag = "Test Plans",
    params(("plan_id" = Uuid, Path, description = "Test plan ID")),
    responses(
        (status = 200, description = "Test plan", body = crate::models::TestPlan),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_plan(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let plan = test_plans::get(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plan))
}

/// Patch a test plan. A provided case list replaces the stored one wholesale.
#[utoipa::path(
    patch,
    path = "/api/v1/test-plans/{plan_id}",
    tag = "Test Plans",
    params(("plan_id" = Uuid, Path, description = "Test plan ID")),
    request_body = UpdateTestPlan,
    responses(
        (status = 200, description = "Updated test plan", body = crate::models::TestPlan),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_test_plan(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTestPlan>,
) -> AppResult<HttpResponse> {
    let updated = test_plans::update(pool.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a test plan.
#[utoipa::path(
    delete,
    path = "/api/v1/test-plans/{plan_id}",
    tag = "Test Plans",
    params(("plan_id" = Uuid, Path, description = "Test plan ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_test_plan(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    test_plans::delete(pool.get_ref(), id).await?;
    info!("Test plan deleted: {}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Get per-plan statistics folded from the executions tagged with this plan.
#[utoipa::path(
    get,
    path = "/api/v1/test-plans/{plan_id}/stats",
    tag = "Test Plans",
    params(("plan_id" = Uuid, Path, description = "Test plan ID")),
    responses(
        (status = 200, description = "Plan statistics", body = crate::models::PlanStats),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_plan_stats(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let plan_stats = stats::compute_plan_stats(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plan_stats))
}

/// Configure test plan routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test-plans")
            .route(web::get().to(list_test_plans))
            .route(web::post().to(create_test_plan)),
    )
    .service(
        web::resource("/test-plans/{plan_id}")
            .route(web::get().to(get_test_plan))
            .route(web::patch().to(update_test_plan))
            .route(web::delete().to(delete_test_plan)),
    )
    .service(web::resource("/test-plans/{plan_id}/stats").route(web::get().to(get_test_plan_stats)));
}
