mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod routes_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routes_config::RoutesConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "AFX_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".afx";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_SESSION_STORAGE_FILE: &str = "session.json";

const DEFAULT_ADMIN_PREFIX: &str = "/afxadmin";
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_ADMIN_LOGIN_PATH: &str = "/afxadmin/login";
const DEFAULT_LANDING_PATH: &str = "/dashboard";
const DEFAULT_ADMIN_ROLE: &str = "admin";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
