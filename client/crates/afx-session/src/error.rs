use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the session store, its storage backends and the accessor.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read session storage at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write session storage at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Session storage corrupted: {message} {location}")]
    Corrupted {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize session: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("use_session() called outside of a SessionProvider scope {location}")]
    NoProvider { location: ErrorLocation },
}

impl SessionError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::FileRead { .. } => {
                "Unable to read the saved session. \
                   The file may be locked by another process."
            }
            Self::FileWrite { .. } | Self::AtomicRename { .. } => {
                "Unable to save the session. \
                   Check disk space and file permissions."
            }
            Self::Corrupted { .. } => {
                "The saved session is unreadable and was discarded. \
                   Please sign in again."
            }
            Self::Serialization { .. } => {
                "Internal error preparing session data. \
                   Please report this issue."
            }
            Self::NoProvider { .. } => {
                "A view tried to read the session outside of the session provider. \
                   Mount it inside the provider scope."
            }
        }
    }

    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite error at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Corrupted error at caller location.
    #[track_caller]
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NoProvider error at caller location.
    #[track_caller]
    pub fn no_provider() -> Self {
        Self::NoProvider {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
