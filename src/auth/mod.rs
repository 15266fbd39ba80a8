//! Admin key verification for privileged endpoints.

mod extractor;

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

pub use extractor::AdminAuth;

/// The configured admin key, wrapped in `SecretString` so it never shows up
/// in debug output and is zeroized on drop. When no key is configured every
/// verification fails, closing the privileged endpoints entirely.
#[derive(Clone)]
pub struct AdminKey(Option<SecretString>);

impl AdminKey {
    pub fn new(key: Option<String>) -> Self {
        Self(key.map(SecretString::from))
    }

    /// Constant-time comparison against the provided header value. Unequal
    /// lengths return false without an early exit, so neither the content nor
    /// the length of the key leaks through timing.
    pub fn verify(&self, provided: &str) -> bool {
        match &self.0 {
            Some(secret) => secret
                .expose_secret()
                .as_bytes()
                .ct_eq(provided.as_bytes())
                .into(),
            None => false,
        }
    }
}

impl std::fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(_) => write!(f, "AdminKey([REDACTED])"),
            None => write!(f, "AdminKey(None)"),
        }
    }
}
