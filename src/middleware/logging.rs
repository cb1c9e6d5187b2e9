use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::interceptors::{AppError, AppResult};

const DEFAULT_LOG_FILE_NAME: &str = "bcrypt-interchange.log";

/// Split a log file setting into directory and file name.
///
/// A bare file name stays in the current directory.
fn log_location(log_file: &str) -> (&Path, &OsStr) {
    let path = Path::new(log_file);
    let directory = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => Path::new("."),
    };
    let file_name = path
        .file_name()
        .unwrap_or(OsStr::new(DEFAULT_LOG_FILE_NAME));

    (directory, file_name)
}

fn log_setup_error(log_file: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::ConfigError(config::ConfigError::Message(format!(
        "cannot write log file `{}`: {}",
        log_file, reason
    )))
}

/// Daily rolling appender for `log_file`, creating its directory first
fn file_appender(log_file: &str) -> AppResult<RollingFileAppender> {
    let (directory, file_name) = log_location(log_file);

    std::fs::create_dir_all(directory).map_err(|e| log_setup_error(log_file, e))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .map_err(|e| log_setup_error(log_file, e))
}

/// Setup logging with stderr and optional file output.
///
/// Stdout is reserved for the single result line, so the console layer
/// writes to stderr. Calling this more than once is a no-op.
pub fn setup_logging(config: &AppConfig) -> AppResult<()> {
    let file_layer = match config.log_file.as_deref() {
        Some(log_file) => Some(
            fmt::layer()
                .with_writer(file_appender(log_file)?)
                .with_target(true)
                .with_ansi(false)
                .json(),
        ),
        None => None,
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized with level: {}", config.log_level);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_stays_in_current_directory() {
        let (directory, file_name) = log_location("app.log");
        assert_eq!(directory, Path::new("."));
        assert_eq!(file_name, OsStr::new("app.log"));
    }

    #[test]
    fn nested_file_keeps_its_directory() {
        let (directory, file_name) = log_location("logs/tools/app.log");
        assert_eq!(directory, Path::new("logs/tools"));
        assert_eq!(file_name, OsStr::new("app.log"));
    }

    #[test]
    fn unwritable_log_file_is_a_config_error() {
        let config = AppConfig {
            log_file: Some("/proc/nonexistent/dir/bcrypt.log".to_string()),
            ..AppConfig::default()
        };

        let err = setup_logging(&config).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("/proc/nonexistent/dir/bcrypt.log"));
    }
}
