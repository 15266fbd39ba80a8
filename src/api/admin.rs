//! Administrative API handlers. All routes here require the admin key.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::AdminAuth;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::admin;

/// Body for the destructive reset. Requires the exact confirmation phrase and
/// a re-authentication with admin account credentials on top of the admin key.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

/// Wipe all QA data.
///
/// Deletes test cases, executions, plans, projects, processed access
/// requests, and the display-ID counters. User accounts and pending access
/// requests are kept. Numbering restarts at `TE/0001` afterwards.
#[utoipa::path(
    post,
    path = "/api/v1/admin/reset",
    tag = "Admin",
    request_body = ResetRequest,
    responses(
        (status = 204, description = "All QA data wiped"),
        (status = 400, description = "Wrong confirmation phrase", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
    ),
    security(("admin_key" = []))
)]
pub async fn reset_data(
    _auth: AdminAuth,
    pool: web::Data<DbPool>,
    body: web::Json<ResetRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    admin::reset_system_data(pool.get_ref(), &req.email, &req.password, &req.confirmation).await?;
    warn!("All QA data has been reset");
    Ok(HttpResponse::NoContent().finish())
}

/// List all user accounts.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = "Admin",
    responses(
        (status = 200, description = "List of users", body = Vec<crate::models::User>),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
    ),
    security(("admin_key" = []))
)]
pub async fn list_users(_auth: AdminAuth, pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let users = pool.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Configure admin routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/admin/reset").route(web::post().to(reset_data)))
        .service(web::resource("/admin/users").route(web::get().to(list_users)));
}
