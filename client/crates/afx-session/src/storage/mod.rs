pub mod file_storage;
pub mod memory_storage;

use crate::SessionResult;

/// Key holding the raw credential token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON-serialized identity.
pub const USER_KEY: &str = "user";

/// Durable key/value storage behind the session store.
///
/// The two session keys are only ever written or removed together through
/// `set_pair` / `remove_pair`; implementations must apply each call as a
/// single update so a reader never sees one key without the other.
pub trait SessionStorage: Send + Sync {
    /// Read one key. `SessionError::Corrupted` means the backing data can no
    /// longer be interpreted at all.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Read `(token, user)` from one consistent view of the storage.
    fn get_pair(&self) -> SessionResult<(Option<String>, Option<String>)>;

    /// Write `token` and `user` in one update.
    fn set_pair(&self, token: &str, user: &str) -> SessionResult<()>;

    /// Remove both keys in one update.
    fn remove_pair(&self) -> SessionResult<()>;
}
