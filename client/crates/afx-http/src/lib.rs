//! afx-http
//!
//! Generic request executor for the dashboard's REST backend. Every call
//! resolves to a value or `None`; failures are logged, never raised. The
//! executor knows nothing about the session: callers attach the bearer token
//! themselves with [`ApiRequest::bearer`].

pub(crate) mod api_request;
pub(crate) mod auth_api;
pub(crate) mod cancel_signal;
pub(crate) mod error;
pub(crate) mod executor;
pub(crate) mod request_outcome;

#[cfg(test)]
mod tests;

pub use api_request::ApiRequest;
pub use auth_api::{ADMIN_LOGIN_ENDPOINT, Credentials, LOGIN_ENDPOINT, SIGNUP_ENDPOINT, SignupRequest};
pub use cancel_signal::CancelSignal;
pub use error::{HttpError, Result as HttpResult};
pub use executor::RequestExecutor;
pub use request_outcome::RequestOutcome;

pub use reqwest::Method;
pub use reqwest::multipart;
