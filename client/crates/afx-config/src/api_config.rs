use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS,
    MAX_API_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Backend REST API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix joined with every request endpoint
    pub base_url: String,
    /// Per-request timeout (0 = no timeout)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs > MAX_API_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be 0-{}, got {}",
                MAX_API_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
