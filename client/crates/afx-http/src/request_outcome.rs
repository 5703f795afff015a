use crate::HttpError;

/// Detailed result of one request.
///
/// `Unauthorized` and `Canceled` are split out so a higher layer can react to
/// an expired session or a user abort without confusing either with an
/// ordinary failure.
#[derive(Debug)]
pub enum RequestOutcome<T> {
    Success(T),
    /// The backend answered 401
    Unauthorized,
    Failed(HttpError),
    Canceled,
}

impl<T> RequestOutcome<T> {
    /// Collapse to the nullable contract: everything but `Success` is `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RequestOutcome<U> {
        match self {
            Self::Success(value) => RequestOutcome::Success(f(value)),
            Self::Unauthorized => RequestOutcome::Unauthorized,
            Self::Failed(err) => RequestOutcome::Failed(err),
            Self::Canceled => RequestOutcome::Canceled,
        }
    }
}
