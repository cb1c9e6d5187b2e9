use crate::services::VerifyOutcome;

/// Line printed when the password does not reproduce the stored digest
pub const MISMATCH: &str = "mismatch";

/// Line printed when no structurally valid hash survived normalization
pub const MISMATCH_INVALID_FORMAT: &str = "mismatch (hash format invalid after cleaning)";

/// Render a verification outcome as the single output line.
///
/// A match echoes the plaintext back so the caller can see which password
/// the stored hash belongs to.
pub fn render_verify_outcome(outcome: VerifyOutcome, password: &str) -> String {
    match outcome {
        VerifyOutcome::Match => password.to_string(),
        VerifyOutcome::NoMatch => MISMATCH.to_string(),
        VerifyOutcome::InvalidFormat => MISMATCH_INVALID_FORMAT.to_string(),
    }
}
