//! Access request workflow: submit, approve, reject.
//!
//! Requests are the only self-service path into the system. A submitted
//! request stores the candidate's credential hash; approval replays it into a
//! real user account. Approve and reject are terminal, so a processed request
//! can never be processed again.

use chrono::Utc;
use uuid::Uuid;

use crate::db::DbPool;
use crate::db::users::NewUserRecord;
use crate::error::{AppError, AppResult};
use crate::models::{AccessRequest, NewAccessRequest, RequestStatus, User};

use super::password;

/// Role granted to accounts created through the approval flow.
const APPROVED_ROLE: &str = "tester";

/// Submit a new access request. At most one pending request per email.
pub async fn submit(pool: &DbPool, new: NewAccessRequest) -> AppResult<AccessRequest> {
    if new.name.trim().is_empty() {
        return Err(AppError::InvalidInput("Name is required".to_string()));
    }
    let email = new.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::InvalidInput(
            "A valid email address is required".to_string(),
        ));
    }
    password::validate_strength(&new.password)?;

    if pool.pending_request_exists(&email).await? {
        return Err(AppError::Conflict(
            "A pending request already exists for this email".to_string(),
        ));
    }

    let password_hash = password::hash_password(&new.password);
    pool.insert_access_request(new.name.trim().to_string(), email, password_hash)
        .await
}

/// List access requests, optionally filtered by status, newest first.
pub async fn list(pool: &DbPool, status: Option<RequestStatus>) -> AppResult<Vec<AccessRequest>> {
    pool.list_access_requests(status).await
}

/// Approve a pending request, creating an active user account with the
/// credential captured at submission time.
///
/// If the email already belongs to an account, the call fails with a conflict
/// and the request stays pending so an admin can reject it explicitly.
pub async fn approve(pool: &DbPool, id: Uuid) -> AppResult<(AccessRequest, User)> {
    let row = pool
        .get_access_request_row(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Access request".to_string()))?;

    if row.status != RequestStatus::Pending.as_str() {
        return Err(AppError::NotFound("Pending access request".to_string()));
    }

    if pool.find_user_by_email(&row.email).await?.is_some() {
        return Err(AppError::Conflict("Email already in use".to_string()));
    }

    let user = pool
        .insert_user(NewUserRecord {
            name: row.name.clone(),
            email: row.email.clone(),
            role: APPROVED_ROLE.to_string(),
            password_hash: row.password_hash.clone(),
        })
        .await?;

    let request = pool.mark_request_approved(row, Utc::now()).await?;

    Ok((request, user))
}

/// Reject a pending request, storing the reason verbatim.
pub async fn reject(pool: &DbPool, id: Uuid, reason: Option<String>) -> AppResult<AccessRequest> {
    let row = pool
        .get_access_request_row(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Access request".to_string()))?;

    if row.status != RequestStatus::Pending.as_str() {
        return Err(AppError::NotFound("Pending access request".to_string()));
    }

    pool.mark_request_rejected(row, reason, Utc::now()).await
}
