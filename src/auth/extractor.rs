//! Actix-web extractor guarding admin-only endpoints.

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use secrecy::{ExposeSecret, SecretString};
use std::future::{Ready, ready};

use super::AdminKey;
use crate::config::ADMIN_KEY_HEADER;
use crate::error::ErrorResponse;

/// Authentication failure raised by the extractor. Always maps to 401 with
/// the standard error envelope.
#[derive(Debug)]
pub struct AuthError {
    message: String,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::UNAUTHORIZED).json(ErrorResponse {
            error: "UNAUTHORIZED".to_string(),
            message: self.message.clone(),
        })
    }
}

/// Extractor that requires a valid `X-Admin-Key` header.
///
/// ```ignore
/// async fn guarded(_auth: AdminAuth) -> impl Responder { ... }
/// ```
///
/// The header value is wrapped in `SecretString` on extraction and compared
/// in constant time; it is zeroized when the request completes.
pub struct AdminAuth;

impl FromRequest for AdminAuth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(stored) = req.app_data::<web::Data<AdminKey>>() else {
            return ready(Err(AuthError {
                message: "Internal configuration error".to_string(),
            }));
        };

        let provided: Option<SecretString> = req
            .headers()
            .get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| SecretString::from(s.to_string()));

        match provided {
            Some(key) if stored.verify(key.expose_secret()) => ready(Ok(AdminAuth)),
            Some(_) => ready(Err(AuthError {
                message: "Invalid admin key".to_string(),
            })),
            None => ready(Err(AuthError {
                message: format!("Missing admin key. Provide the {} header.", ADMIN_KEY_HEADER),
            })),
        }
    }
}
