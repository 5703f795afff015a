use crate::{Session, SessionError, SessionResult, SessionStore};

use afx_core::{AuthResponse, CredentialToken, Identity};

use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static PROVIDERS: RefCell<Vec<SessionStore>> = const { RefCell::new(Vec::new()) };
}

/// Scope during which [`use_session`] resolves to a store.
///
/// Created by [`SessionStore::provide`]. Scopes nest, the innermost one wins,
/// and they are local to the thread that created them. Dropping the guard
/// ends the scope.
#[must_use = "the provider scope ends when this guard is dropped"]
pub struct SessionProvider {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for SessionProvider {
    fn drop(&mut self) {
        PROVIDERS.with(|providers| providers.borrow_mut().truncate(self.depth - 1));
    }
}

impl SessionStore {
    /// Make this store visible to [`use_session`] until the guard is dropped.
    pub fn provide(&self) -> SessionProvider {
        let depth = PROVIDERS.with(|providers| {
            let mut providers = providers.borrow_mut();
            providers.push(self.clone());
            providers.len()
        });

        SessionProvider {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Run `f` inside a provider scope for this store.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _provider = self.provide();
        f()
    }
}

/// Access the session of the innermost provider scope.
///
/// Calling this outside any scope is a wiring bug and fails with
/// [`SessionError::NoProvider`] instead of handing out an empty session.
#[track_caller]
pub fn use_session() -> SessionResult<SessionContext> {
    match PROVIDERS.with(|providers| providers.borrow().last().cloned()) {
        Some(store) => Ok(SessionContext::new(store)),
        None => Err(SessionError::no_provider()),
    }
}

/// What a view gets from [`use_session`]: a snapshot plus the mutators.
///
/// The snapshot is taken when the context is created and refreshed after
/// `login`/`logout` through this context.
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: SessionStore,
    session: Session,
}

impl SessionContext {
    fn new(store: SessionStore) -> Self {
        let session = store.snapshot();
        Self { store, session }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity.as_ref()
    }

    pub fn token(&self) -> Option<&CredentialToken> {
        self.session.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn login(&mut self, identity: Identity, token: CredentialToken) -> SessionResult<()> {
        let result = self.store.login(identity, token);
        self.session = self.store.snapshot();
        result
    }

    pub fn login_with(&mut self, response: AuthResponse) -> SessionResult<()> {
        self.login(response.user, response.token)
    }

    pub fn logout(&mut self) -> SessionResult<()> {
        let result = self.store.logout();
        self.session = self.store.snapshot();
        result
    }
}
