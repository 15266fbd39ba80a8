//! Dashboard statistics API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::stats;

/// Get dashboard-wide statistics.
///
/// Computed by a full rescan at request time; totals, per-status and
/// per-priority tallies, and the five most recent executions.
#[utoipa::path(
    get,
    path = "/api/v1/stats/dashboard",
    tag = "Stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = crate::models::GlobalStats),
    )
)]
pub async fn get_dashboard_stats(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let global = stats::compute_global_stats(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(global))
}

/// Configure stats routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/stats/dashboard").route(web::get().to(get_dashboard_stats)));
}
