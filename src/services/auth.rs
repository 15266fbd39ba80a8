//! Account sign-in and master account provisioning.

use crate::db::DbPool;
use crate::db::users::{NewUserRecord, model_to_user};
use crate::error::{AppError, AppResult};
use crate::models::User;

use super::password;

/// Uniform message for wrong email or wrong password, so a probe cannot tell
/// which one it was.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Email of the built-in master administrator account.
pub const MASTER_ADMIN_EMAIL: &str = "admin@hybex.com";

/// Initial password for the master administrator account, printed once by the
/// setup tool.
pub const MASTER_ADMIN_PASSWORD: &str = "hybex@2024";

/// Outcome of [`ensure_master_account`].
#[derive(Debug, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
}

/// Authenticate by email and password. Stamps the login time on success.
pub async fn sign_in(pool: &DbPool, email: &str, pass: &str) -> AppResult<User> {
    let email = email.trim().to_lowercase();

    let row = pool
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if !row.is_active {
        return Err(AppError::Unauthorized("Account is deactivated".to_string()));
    }

    if !password::verify_password(pass, &row.password_hash) {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    pool.set_last_login(row.id).await?;

    Ok(model_to_user(row))
}

/// Create a user account directly, outside the access request flow.
pub async fn create_account(
    pool: &DbPool,
    name: &str,
    email: &str,
    role: &str,
    pass: &str,
) -> AppResult<User> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidInput("Name is required".to_string()));
    }
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::InvalidInput(
            "A valid email address is required".to_string(),
        ));
    }
    password::validate_strength(pass)?;

    if pool.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already in use".to_string()));
    }

    pool.insert_user(NewUserRecord {
        name: name.trim().to_string(),
        email,
        role: role.to_string(),
        password_hash: password::hash_password(pass),
    })
    .await
}

/// Create the master administrator account if it does not exist yet.
/// Idempotent; a second run reports [`ProvisionOutcome::AlreadyExists`].
pub async fn ensure_master_account(pool: &DbPool) -> AppResult<ProvisionOutcome> {
    if pool.find_user_by_email(MASTER_ADMIN_EMAIL).await?.is_some() {
        return Ok(ProvisionOutcome::AlreadyExists);
    }

    pool.insert_user(NewUserRecord {
        name: "Administrator".to_string(),
        email: MASTER_ADMIN_EMAIL.to_string(),
        role: "admin".to_string(),
        password_hash: password::hash_password(MASTER_ADMIN_PASSWORD),
    })
    .await?;

    Ok(ProvisionOutcome::Created)
}
