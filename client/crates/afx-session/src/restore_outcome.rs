/// What `SessionStore::restore` found in durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A complete, valid pair was loaded
    Restored { user_id: i64 },
    /// Nothing persisted (first launch or after logout)
    Empty,
    /// Persisted values were unusable and have been removed
    Discarded { reason: String },
    /// Storage could not be read; nothing was changed on disk
    Unavailable { reason: String },
}

impl RestoreOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, Self::Restored { .. })
    }
}
