//! Client-side session: the current identity/token pair, its durable
//! persistence, and the scoped accessor views use to read it.

pub(crate) mod error;
pub(crate) mod provider;
pub(crate) mod restore_outcome;
pub(crate) mod session;
pub(crate) mod storage;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use error::{Result as SessionResult, SessionError};
pub use provider::{SessionContext, SessionProvider, use_session};
pub use restore_outcome::RestoreOutcome;
pub use session::Session;
pub use storage::{
    SessionStorage, TOKEN_KEY, USER_KEY, file_storage::FileStorage,
    memory_storage::MemoryStorage,
};
pub use store::SessionStore;
