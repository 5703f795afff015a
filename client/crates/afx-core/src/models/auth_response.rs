use crate::{CredentialToken, Identity};

use serde::{Deserialize, Serialize};

/// Body returned by the login and signup endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Identity,
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: CredentialToken,
}
