pub mod auth_response;
pub mod credential_token;
pub mod identity;
pub mod role;
