use bcrypt::{hash_with_result, verify, BcryptError};

use crate::models::HashVersion;

/// bcrypt only reads this many bytes of the password
pub const MAX_PASSWORD_BYTES: usize = 72;

/// The bcrypt primitive the hash service delegates to
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher {
    /// Hash with a fresh random salt, encoded with the given version marker
    fn hash(&self, password: &str, cost: u32, version: HashVersion) -> Result<String, BcryptError>;

    /// Check a password against a canonical bcrypt payload
    fn verify(&self, password: &str, hash: &str) -> Result<bool, BcryptError>;
}

/// `PasswordHasher` backed by the `bcrypt` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcrypt;

impl PasswordHasher for Bcrypt {
    fn hash(&self, password: &str, cost: u32, version: HashVersion) -> Result<String, BcryptError> {
        hash_password(password, cost, version)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, BcryptError> {
        verify_password(password, hash)
    }
}

/// Hash a password using bcrypt
pub fn hash_password(password: &str, cost: u32, version: HashVersion) -> Result<String, BcryptError> {
    hash_with_result(password, cost).map(|parts| parts.format_for_version(version.into()))
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    verify(password, hash)
}

/// Errors caused by the shape of the stored hash rather than by the primitive itself
pub fn is_format_error(err: &BcryptError) -> bool {
    matches!(
        err,
        BcryptError::InvalidCost(_)
            | BcryptError::InvalidPrefix(_)
            | BcryptError::InvalidHash(_)
            | BcryptError::InvalidSaltLen(_)
            | BcryptError::InvalidBase64(_)
            | BcryptError::CostNotAllowed(_)
    )
}
