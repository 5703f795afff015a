mod auth_response;
mod credential_token;
mod identity;
mod role;
