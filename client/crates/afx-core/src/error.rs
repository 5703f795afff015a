use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid credential token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
