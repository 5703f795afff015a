use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_STORAGE_FILE};

use std::path::Path;

use serde::Deserialize;

/// Durable session storage settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File holding the persisted token/user pair, relative to the config dir
    pub storage_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_file: String::from(DEFAULT_SESSION_STORAGE_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_file.trim().is_empty() {
            return Err(ConfigError::session("session.storage_file cannot be empty"));
        }

        if Path::new(&self.storage_file).is_absolute() || self.storage_file.contains("..") {
            return Err(ConfigError::session(
                "session.storage_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
