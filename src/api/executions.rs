//! Execution recording API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::NewExecution;
use crate::services::executions;

/// Record an execution of a test case.
///
/// The execution is appended to the history, the owning test case's status
/// and run fields are patched, and, when a project is referenced, its rollup
/// counters are updated. Failed executions must carry observations.
#[utoipa::path(
    post,
    path = "/api/v1/executions",
    tag = "Executions",
    request_body = NewExecution,
    responses(
        (status = 201, description = "Execution recorded", body = crate::models::Execution),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Test case not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn record_execution(
    pool: web::Data<DbPool>,
    body: web::Json<NewExecution>,
) -> AppResult<HttpResponse> {
    let execution = executions::record(pool.get_ref(), body.into_inner()).await?;
    info!(
        "Execution recorded: test={} status={}",
        execution.test_id,
        execution.status.as_str()
    );
    Ok(HttpResponse::Created().json(execution))
}

/// Configure execution routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/executions").route(web::post().to(record_execution)));
}
