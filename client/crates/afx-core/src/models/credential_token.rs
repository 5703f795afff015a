use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque bearer credential issued by the backend at login.
///
/// The raw value never appears in `Debug` or `Display` output so it cannot
/// leak into logs by accident. Use [`CredentialToken::expose`] when the raw
/// string is really needed.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CredentialToken(String);

impl CredentialToken {
    #[track_caller]
    pub fn new(value: impl Into<String>) -> CoreErrorResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(CoreError::InvalidToken {
                message: "token cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidToken {
                message: "token cannot contain whitespace".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for CredentialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialToken(***)")
    }
}

impl fmt::Display for CredentialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl<'de> Deserialize<'de> for CredentialToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CredentialToken::new(raw).map_err(serde::de::Error::custom)
    }
}
