use crate::{ApiRequest, RequestExecutor};

use afx_core::AuthResponse;

use std::fmt;

use serde::Serialize;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const ADMIN_LOGIN_ENDPOINT: &str = "/admin/login";
pub const SIGNUP_ENDPOINT: &str = "/auth/signup";

/// Email/password pair posted to the login endpoints
#[derive(Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Registration form
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

impl RequestExecutor {
    /// Sign in a regular user
    pub async fn login(&self, credentials: &Credentials) -> Option<AuthResponse> {
        self.request(ApiRequest::post(LOGIN_ENDPOINT).json(credentials))
            .await
    }

    /// Sign in through the admin console
    pub async fn admin_login(&self, credentials: &Credentials) -> Option<AuthResponse> {
        self.request(ApiRequest::post(ADMIN_LOGIN_ENDPOINT).json(credentials))
            .await
    }

    /// Register a new account; the backend signs the user in on success
    pub async fn signup(&self, request: &SignupRequest) -> Option<AuthResponse> {
        self.request(ApiRequest::post(SIGNUP_ENDPOINT).json(request))
            .await
    }
}
