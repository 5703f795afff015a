pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::auth_response::AuthResponse;
pub use models::credential_token::CredentialToken;
pub use models::identity::Identity;
pub use models::role::Role;

#[cfg(test)]
mod tests;
