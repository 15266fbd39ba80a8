//! Destructive administration operations.

use crate::db::DbPool;
use crate::error::{AppError, AppResult};

use super::password;

/// Exact phrase a caller must type to confirm a full data reset.
pub const RESET_CONFIRMATION_PHRASE: &str = "RESET ALL DATA";

/// Wipe all QA data after re-authenticating the administrator.
///
/// Requires the exact confirmation phrase plus the credentials of an active
/// admin account. User accounts and pending access requests survive the
/// reset; everything else, including the display-ID counters, is cleared, so
/// numbering restarts at `TE/0001`.
pub async fn reset_system_data(
    pool: &DbPool,
    email: &str,
    pass: &str,
    confirmation: &str,
) -> AppResult<()> {
    if confirmation != RESET_CONFIRMATION_PHRASE {
        return Err(AppError::InvalidInput(format!(
            "Confirmation phrase must be exactly '{}'",
            RESET_CONFIRMATION_PHRASE
        )));
    }

    let row = pool
        .find_user_by_email(email.trim().to_lowercase().as_str())
        .await?
        .ok_or_else(|| AppError::Unauthorized("Administrator credentials required".to_string()))?;

    if row.role != "admin" || !row.is_active {
        return Err(AppError::Unauthorized(
            "Administrator credentials required".to_string(),
        ));
    }
    if !password::verify_password(pass, &row.password_hash) {
        return Err(AppError::Unauthorized(
            "Administrator credentials required".to_string(),
        ));
    }

    tracing::warn!("Full data reset requested by {}", row.email);
    pool.reset_qa_data().await
}
