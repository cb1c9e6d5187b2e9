use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Error codes reported alongside the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    HashError,
    ConfigError,
    ValidationError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::HashError => "HASH_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Exit status: 2 for bad setup, 1 for runtime failures
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::ConfigError | ErrorCode::ValidationError => 2,
            ErrorCode::HashError | ErrorCode::InternalError => 1,
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::HashError(_) => ErrorCode::HashError,
            AppError::ConfigError(_) => ErrorCode::ConfigError,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::InternalError(_) => ErrorCode::InternalError,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.error_code().exit_code()
    }

    /// Log the error, print it to stderr and terminate the process
    pub fn exit(self) -> ! {
        let code = self.error_code();
        tracing::error!(code = code.as_str(), "Application error: {:?}", self);
        eprintln!("error[{}]: {}", code.as_str(), self);
        std::process::exit(code.exit_code())
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;
