//! Password hashing and verification.
//!
//! Salted SHA-256, stored as `salt$hexdigest`. Verification compares digests
//! in constant time.

use rand::Rng;
use rand::distr::Alphanumeric;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::{AppError, AppResult};

/// Length of the random salt prepended to each hash.
const SALT_LENGTH: usize = 16;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LENGTH)
        .map(char::from)
        .collect();

    let digest = digest_with_salt(&salt, password);
    format!("{}${}", salt, digest)
}

/// Verify a password against a stored `salt$digest` value.
///
/// Returns false for malformed stored values rather than erroring; a corrupt
/// hash must never let a login through.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };

    let computed = digest_with_salt(salt, password);
    computed.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Reject passwords below the minimum length.
pub fn validate_strength(password: &str) -> AppResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
