pub mod app_config;

pub use app_config::{AppConfig, ENV_PREFIX};
