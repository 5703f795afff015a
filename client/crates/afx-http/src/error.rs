use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Everything that can go wrong issuing a single request.
///
/// These never reach callers of [`crate::RequestExecutor::request`]; they are
/// logged and exposed only through [`crate::RequestOutcome::Failed`].
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status}: {message} (code: {code}) {location}")]
    Status {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request encode error: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid header '{name}': {message} {location}")]
    InvalidHeader {
        name: String,
        message: String,
        location: ErrorLocation,
    },
}

impl HttpError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn transport(err: reqwest::Error) -> Self {
        HttpError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Non-2xx response
    #[track_caller]
    pub fn status(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        HttpError::Status {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(err: serde_json::Error) -> Self {
        HttpError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn encode(err: serde_json::Error) -> Self {
        HttpError::Encode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        HttpError::InvalidHeader {
            name: name.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status code, when the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

impl From<reqwest::Error> for HttpError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        HttpError::transport(err)
    }
}

pub type Result<T> = std::result::Result<T, HttpError>;
