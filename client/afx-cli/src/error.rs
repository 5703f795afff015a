use afx_http::HttpError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] afx_config::ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] afx_session::SessionError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Invalid JSON payload: {source} {location}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Sign-in rejected: {message} {location}")]
    SignInRejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not signed in; sign in at {login_path} {location}")]
    NotSignedIn {
        login_path: String,
        location: ErrorLocation,
    },

    #[error("Session expired and was cleared; sign in again at {login_path} {location}")]
    SessionExpired {
        login_path: String,
        location: ErrorLocation,
    },

    #[error("Request canceled {location}")]
    Canceled { location: ErrorLocation },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn invalid_json(source: serde_json::Error) -> Self {
        Self::InvalidJson {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sign_in_rejected(message: impl Into<String>) -> Self {
        Self::SignInRejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in(login_path: impl Into<String>) -> Self {
        Self::NotSignedIn {
            login_path: login_path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_expired(login_path: impl Into<String>) -> Self {
        Self::SessionExpired {
            login_path: login_path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn canceled() -> Self {
        Self::Canceled {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
