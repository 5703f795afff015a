use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_LOGIN_PATH, DEFAULT_ADMIN_PREFIX,
    DEFAULT_ADMIN_ROLE, DEFAULT_LANDING_PATH, DEFAULT_LOGIN_PATH,
};

use serde::Deserialize;

/// Paths the route guards redirect between
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Reserved prefix of the admin console
    pub admin_prefix: String,
    pub login_path: String,
    pub admin_login_path: String,
    /// Where an already signed-in user is sent when no return path was recorded
    pub landing_path: String,
    /// Role name required inside the admin prefix
    pub admin_role: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            admin_prefix: String::from(DEFAULT_ADMIN_PREFIX),
            login_path: String::from(DEFAULT_LOGIN_PATH),
            admin_login_path: String::from(DEFAULT_ADMIN_LOGIN_PATH),
            landing_path: String::from(DEFAULT_LANDING_PATH),
            admin_role: String::from(DEFAULT_ADMIN_ROLE),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("routes.admin_prefix", &self.admin_prefix),
            ("routes.login_path", &self.login_path),
            ("routes.admin_login_path", &self.admin_login_path),
            ("routes.landing_path", &self.landing_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::routes(format!(
                    "{name} must start with '/', got '{value}'"
                )));
            }
        }

        if self.admin_prefix.len() < 2 {
            return Err(ConfigError::routes(
                "routes.admin_prefix cannot be the root path",
            ));
        }

        if !self.admin_login_path.starts_with(&self.admin_prefix) {
            return Err(ConfigError::routes(format!(
                "routes.admin_login_path '{}' must be under routes.admin_prefix '{}'",
                self.admin_login_path, self.admin_prefix
            )));
        }

        if self.landing_path.starts_with(&self.admin_prefix) {
            return Err(ConfigError::routes(
                "routes.landing_path cannot be inside the admin area",
            ));
        }

        if self.admin_role.trim().is_empty() {
            return Err(ConfigError::routes("routes.admin_role cannot be empty"));
        }

        Ok(())
    }
}
