pub mod password;
pub mod validation;

pub use password::{hash_password, is_format_error, verify_password, Bcrypt, PasswordHasher, MAX_PASSWORD_BYTES};
pub use validation::validate_settings;

#[cfg(test)]
pub use password::MockPasswordHasher;
