use tracing::info;

use crate::dto::VerifyArgs;
use crate::interceptors::{render_verify_outcome, AppResult};
use crate::services::HashService;
use crate::utils::PasswordHasher;

/// Produce the password, `mismatch`, or the invalid-format line
pub fn handle<H: PasswordHasher>(args: &VerifyArgs, service: &HashService<H>) -> AppResult<String> {
    let outcome = service.verify(&args.password, &args.bcrypt_hash)?;
    info!(?outcome, "Verification finished");

    Ok(render_verify_outcome(outcome, &args.password))
}
