use crate::dto::HashArgs;
use crate::interceptors::AppResult;
use crate::services::HashService;
use crate::utils::PasswordHasher;

/// Produce the `{bcrypt}<hash>` output line
pub fn handle<H: PasswordHasher>(args: &HashArgs, service: &HashService<H>) -> AppResult<String> {
    service.generate(&args.password)
}
