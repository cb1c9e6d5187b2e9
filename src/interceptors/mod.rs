pub mod response;
pub mod error;

pub use response::{render_verify_outcome, MISMATCH, MISMATCH_INVALID_FORMAT};
pub use error::{AppError, AppResult, ErrorCode};
