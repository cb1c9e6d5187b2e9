use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::interceptors::AppResult;
use crate::models::HashVersion;
use crate::utils::validate_settings;

/// Prefix of every environment variable the tools read
pub const ENV_PREFIX: &str = "BCRYPT_TOOL";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(custom(function = "validate_log_level"))]
    pub log_level: String,
    pub log_file: Option<String>,
    pub hash_version: HashVersion,
    /// Disable re-anchoring on an embedded `$2` marker
    pub strict_marker: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            hash_version: HashVersion::TwoA,
            strict_marker: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();

        let source = config::Environment::with_prefix(ENV_PREFIX).prefix_separator("_");
        Self::from_source(source)
    }

    /// Build from any `config` source layered over the defaults, then validate.
    pub fn from_source<S>(source: S) -> AppResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();

        let cfg = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("hash_version", defaults.hash_version.as_str())?
            .set_default("strict_marker", defaults.strict_marker)?
            .add_source(source)
            .build()?;

        let app_config: AppConfig = cfg.try_deserialize()?;
        validate_settings(&app_config)?;

        Ok(app_config)
    }

    pub fn with_log_level(mut self, level: Option<&str>) -> AppResult<Self> {
        if let Some(level) = level {
            self.log_level = level.to_string();
            validate_settings(&self)?;
        }
        Ok(self)
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Ok(());
    }

    let mut err = ValidationError::new("log_level");
    err.message = Some(format!("unknown level `{}`, expected one of {}", level, LOG_LEVELS.join("|")).into());
    Err(err)
}
