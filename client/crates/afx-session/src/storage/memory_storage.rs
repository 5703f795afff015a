use crate::{SessionResult, SessionStorage, TOKEN_KEY, USER_KEY};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-process storage for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from arbitrary raw entries, e.g. data left behind by an older build.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn get_pair(&self) -> SessionResult<(Option<String>, Option<String>)> {
        let entries = self.lock();
        Ok((entries.get(TOKEN_KEY).cloned(), entries.get(USER_KEY).cloned()))
    }

    fn set_pair(&self, token: &str, user: &str) -> SessionResult<()> {
        let mut entries = self.lock();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), user.to_string());
        Ok(())
    }

    fn remove_pair(&self) -> SessionResult<()> {
        let mut entries = self.lock();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
        Ok(())
    }
}
