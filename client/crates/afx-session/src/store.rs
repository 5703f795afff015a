use crate::{RestoreOutcome, Session, SessionError, SessionResult, SessionStorage};

use afx_core::{AuthResponse, CredentialToken, Identity};

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{error, info, warn};

#[derive(Debug)]
struct SessionState {
    /// Identity and token only ever exist together
    auth: Option<(Identity, CredentialToken)>,
    is_loading: bool,
}

/// Single source of truth for the signed-in identity and its token.
///
/// Cloning yields another handle to the same session. Stores are built
/// explicitly and handed to whoever needs them; there is no global instance.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// New store in the loading state. Call [`restore`](Self::restore) once
    /// at startup.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState {
                auth: None,
                is_loading: true,
            })),
            storage,
        }
    }

    /// Load the persisted pair into memory.
    ///
    /// Never fails: anything unusable is discarded, logged, and leaves the
    /// session signed out. `is_loading` is false afterwards in every case.
    pub fn restore(&self) -> RestoreOutcome {
        let (auth, outcome) = self.load_persisted();

        let mut state = self.write_state();
        state.auth = auth;
        state.is_loading = false;

        match &outcome {
            RestoreOutcome::Restored { user_id } => info!("Restored session for user {user_id}"),
            RestoreOutcome::Empty => info!("No persisted session"),
            RestoreOutcome::Discarded { reason } => warn!("Discarded persisted session: {reason}"),
            RestoreOutcome::Unavailable { reason } => {
                error!("Session storage unavailable, starting signed out: {reason}")
            }
        }

        outcome
    }

    /// Replace the current session and persist both values.
    ///
    /// Storage is written first; if that fails nothing changes, in memory or
    /// on disk, and the error is returned.
    pub fn login(&self, identity: Identity, token: CredentialToken) -> SessionResult<()> {
        let user_json = serde_json::to_string(&identity)?;
        self.storage.set_pair(token.expose(), &user_json)?;

        let user_id = identity.id;
        self.write_state().auth = Some((identity, token));

        info!("Signed in user {user_id}");
        Ok(())
    }

    /// [`login`](Self::login) with a backend auth response.
    pub fn login_with(&self, response: AuthResponse) -> SessionResult<()> {
        self.login(response.user, response.token)
    }

    /// Clear the session from memory and from storage.
    ///
    /// Memory is always cleared; a storage failure is returned afterwards.
    pub fn logout(&self) -> SessionResult<()> {
        let previous = self.write_state().auth.take();

        if let Some((identity, _)) = previous {
            info!("Signed out user {}", identity.id);
        }

        self.storage.remove_pair()
    }

    pub fn snapshot(&self) -> Session {
        let state = self.read_state();
        let (identity, token) = match &state.auth {
            Some((identity, token)) => (Some(identity.clone()), Some(token.clone())),
            None => (None, None),
        };

        Session {
            identity,
            token,
            is_loading: state.is_loading,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().auth.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().is_loading
    }

    pub fn identity(&self) -> Option<Identity> {
        self.read_state().auth.as_ref().map(|(i, _)| i.clone())
    }

    pub fn token(&self) -> Option<CredentialToken> {
        self.read_state().auth.as_ref().map(|(_, t)| t.clone())
    }

    fn load_persisted(&self) -> (Option<(Identity, CredentialToken)>, RestoreOutcome) {
        let (token, user) = match self.storage.get_pair() {
            Ok(pair) => pair,
            Err(e @ SessionError::Corrupted { .. }) => {
                return (None, self.discard(e.to_string()));
            }
            Err(e) => {
                return (
                    None,
                    RestoreOutcome::Unavailable {
                        reason: e.to_string(),
                    },
                );
            }
        };

        match (token, user) {
            (None, None) => (None, RestoreOutcome::Empty),
            (Some(_), None) => (None, self.discard("token without user".to_string())),
            (None, Some(_)) => (None, self.discard("user without token".to_string())),
            (Some(token), Some(user)) => {
                let token = match CredentialToken::new(token) {
                    Ok(token) => token,
                    Err(e) => return (None, self.discard(e.to_string())),
                };

                match serde_json::from_str::<Identity>(&user) {
                    Ok(identity) => {
                        let user_id = identity.id;
                        (Some((identity, token)), RestoreOutcome::Restored { user_id })
                    }
                    Err(e) => (None, self.discard(format!("unparsable user: {e}"))),
                }
            }
        }
    }

    fn discard(&self, reason: String) -> RestoreOutcome {
        if let Err(e) = self.storage.remove_pair() {
            error!("Failed to clear unusable session storage: {e}");
        }
        RestoreOutcome::Discarded { reason }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("SessionStore")
            .field("user_id", &state.auth.as_ref().map(|(i, _)| i.id))
            .field("is_loading", &state.is_loading)
            .finish_non_exhaustive()
    }
}
