//! Access request API handlers.
//!
//! Submission is public; listing and processing require the admin key.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::AdminAuth;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{NewAccessRequest, RequestStatus};
use crate::services::access_requests;

/// Optional status filter for listing.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListRequestsQuery {
    pub status: Option<RequestStatus>,
}

/// Body for rejecting a request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectRequest {
    pub reason: Option<String>,
}

/// Response for an approval: the processed request plus the created account.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApproveResponse {
    pub request: crate::models::AccessRequest,
    pub user: crate::models::User,
}

/// Submit an access request.
///
/// Public endpoint; at most one pending request per email.
#[utoipa::path(
    post,
    path = "/api/v1/access-requests",
    tag = "Access Requests",
    request_body = NewAccessRequest,
    responses(
        (status = 201, description = "Request submitted", body = crate::models::AccessRequest),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 409, description = "Pending request already exists", body = crate::error::ErrorResponse),
    )
)]
pub async fn submit_request(
    pool: web::Data<DbPool>,
    body: web::Json<NewAccessRequest>,
) -> AppResult<HttpResponse> {
    let request = access_requests::submit(pool.get_ref(), body.into_inner()).await?;
    info!("Access request submitted: {}", request.email);
    Ok(HttpResponse::Created().json(request))
}

/// List access requests, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/v1/access-requests",
    tag = "Access Requests",
    params(("status" = Option<String>, Query, description = "Filter by status (pending, approved, rejected)")),
    responses(
        (status = 200, description = "List of access requests", body = Vec<crate::models::AccessRequest>),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
    ),
    security(("admin_key" = []))
)]
pub async fn list_requests(
    _auth: AdminAuth,
    pool: web::Data<DbPool>,
    query: web::Query<ListRequestsQuery>,
) -> AppResult<HttpResponse> {
    let requests = access_requests::list(pool.get_ref(), query.into_inner().status).await?;
    Ok(HttpResponse::Ok().json(requests))
}

/// Approve a pending access request, creating an active user account.
#[utoipa::path(
    post,
    path = "/api/v1/access-requests/{request_id}/approve",
    tag = "Access Requests",
    params(("request_id" = Uuid, Path, description = "Access request ID")),
    responses(
        (status = 200, description = "Request approved", body = ApproveResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
        (status = 404, description = "No pending request with this ID", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already in use", body = crate::error::ErrorResponse),
    ),
    security(("admin_key" = []))
)]
pub async fn approve_request(
    _auth: AdminAuth,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let (request, user) = access_requests::approve(pool.get_ref(), path.into_inner()).await?;
    info!("Access request approved: {} -> user {}", request.email, user.id);
    Ok(HttpResponse::Ok().json(ApproveResponse { request, user }))
}

/// Reject a pending access request.
#[utoipa::path(
    post,
    path = "/api/v1/access-requests/{request_id}/reject",
    tag = "Access Requests",
    params(("request_id" = Uuid, Path, description = "Access request ID")),
    request_body = RejectRequest,
    responses(
        (status = 200, description = "Request rejected", body = crate::models::AccessRequest),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
        (status = 404, description = "No pending request with this ID", body = crate::error::ErrorResponse),
    ),
    security(("admin_key" = []))
)]
pub async fn reject_request(
    _auth: AdminAuth,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<RejectRequest>,
) -> AppResult<HttpResponse> {
    let request =
        access_requests::reject(pool.get_ref(), path.into_inner(), body.into_inner().reason)
            .await?;
    info!("Access request rejected: {}", request.email);
    Ok(HttpResponse::Ok().json(request))
}

/// Configure access request routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/access-requests")
            .route(web::get().to(list_requests))
            .route(web::post().to(submit_request)),
    )
    .service(
        web::resource("/access-requests/{request_id}/approve")
            .route(web::post().to(approve_request)),
    )
    .service(
        web::resource("/access-requests/{request_id}/reject")
            .route(web::post().to(reject_request)),
    );
}
