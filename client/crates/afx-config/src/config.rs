use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, RoutesConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub routes: RoutesConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AFX_CONFIG_DIR env var, else use ./.afx/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AFX_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AFX_CONFIG_DIR env var > ./.afx/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load().
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.routes.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.trim().is_empty() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name without '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the durable session file.
    pub fn session_storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.storage_file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {})",
            self.api.base_url,
            match self.api.timeout() {
                Some(t) => format!("{}s", t.as_secs()),
                None => "none".to_string(),
            }
        );
        info!("  session: storage_file={}", self.session.storage_file);
        info!(
            "  routes: login={}, admin_prefix={}, admin_login={}, landing={}",
            self.routes.login_path,
            self.routes.admin_prefix,
            self.routes.admin_login_path,
            self.routes.landing_path
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("AFX_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("AFX_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_string("AFX_SESSION_STORAGE_FILE", &mut self.session.storage_file);

        // Routes
        Self::apply_env_string("AFX_ROUTES_ADMIN_PREFIX", &mut self.routes.admin_prefix);
        Self::apply_env_string("AFX_ROUTES_LOGIN_PATH", &mut self.routes.login_path);
        Self::apply_env_string(
            "AFX_ROUTES_ADMIN_LOGIN_PATH",
            &mut self.routes.admin_login_path,
        );
        Self::apply_env_string("AFX_ROUTES_LANDING_PATH", &mut self.routes.landing_path);
        Self::apply_env_string("AFX_ROUTES_ADMIN_ROLE", &mut self.routes.admin_role);

        // Logging
        Self::apply_env_parse("AFX_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AFX_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AFX_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
