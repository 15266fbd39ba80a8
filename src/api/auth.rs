//! Authentication API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::LoginRequest;
use crate::services::auth;

/// Sign in with email and password.
///
/// Returns the user profile on success. Wrong email and wrong password both
/// yield the same 401 message.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated user", body = crate::models::User),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse),
    )
)]
pub async fn login(
    pool: web::Data<DbPool>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = auth::sign_in(pool.get_ref(), &req.email, &req.password).await?;
    info!("Login: {}", user.email);
    Ok(HttpResponse::Ok().json(user))
}

/// Configure auth routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/login").route(web::post().to(login)));
}
