use crate::{CliError, CliResult};

use afx_config::Config;
use afx_core::Identity;
use afx_guard::{
    Location, LocationState, RedirectKind, RouteDecision, RoutePaths, require_auth_with_context,
    require_guest_with_context,
};
use afx_http::{
    ApiRequest, CancelSignal, Credentials, Method, RequestExecutor, RequestOutcome, SignupRequest,
};
use afx_session::{FileStorage, RestoreOutcome, SessionStore};

use std::sync::Arc;

use log::{error, info, warn};
use serde_json::{Value, json};

/// The dashboard shell: one session store, one executor, one set of routes.
pub struct App {
    store: SessionStore,
    executor: RequestExecutor,
    paths: RoutePaths,
}

impl App {
    pub fn new(store: SessionStore, executor: RequestExecutor, paths: RoutePaths) -> Self {
        Self {
            store,
            executor,
            paths,
        }
    }

    /// Build from validated config and restore the persisted session.
    pub fn from_config(config: &Config) -> CliResult<(Self, RestoreOutcome)> {
        let storage = FileStorage::new(config.session_storage_path()?);
        let store = SessionStore::new(Arc::new(storage));
        let outcome = store.restore();

        let executor = RequestExecutor::from_config(&config.api)?;
        let paths = RoutePaths::from(&config.routes);

        Ok((Self::new(store, executor, paths), outcome))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn paths(&self) -> &RoutePaths {
        &self.paths
    }

    /// Sign in and persist the session. Returns the signed-in identity.
    ///
    /// An admin sign-in whose identity lacks the admin role is rejected
    /// without touching the current session.
    pub async fn login(&self, credentials: Credentials, admin: bool) -> CliResult<Identity> {
        let response = if admin {
            self.executor.admin_login(&credentials).await
        } else {
            self.executor.login(&credentials).await
        };

        let Some(response) = response else {
            return Err(CliError::sign_in_rejected(format!(
                "backend refused credentials for {}",
                credentials.email
            )));
        };

        if admin && !response.user.has_role(&self.paths.admin_role) {
            warn!("User {} lacks role '{}'", response.user.id, self.paths.admin_role);
            return Err(CliError::sign_in_rejected(format!(
                "{} is not an administrator",
                response.user.email
            )));
        }

        let identity = response.user.clone();
        self.store.login_with(response)?;
        Ok(identity)
    }

    /// Register, then sign in through the store like any other login.
    pub async fn signup(&self, request: SignupRequest) -> CliResult<Identity> {
        let Some(response) = self.executor.signup(&request).await else {
            return Err(CliError::sign_in_rejected(format!(
                "signup failed for {}",
                request.email
            )));
        };

        let identity = response.user.clone();
        self.store.login_with(response)?;
        Ok(identity)
    }

    pub fn logout(&self) -> CliResult<()> {
        self.store.logout()?;
        Ok(())
    }

    pub fn whoami(&self) -> Option<Identity> {
        self.store.identity()
    }

    /// Evaluate the guard that would be mounted for `path` inside a provider
    /// scope for this app's session.
    pub fn route(&self, path: &str, from: Option<&str>, guest: bool) -> CliResult<RouteDecision> {
        let decision = self.store.scope(|| {
            if guest {
                let state = LocationState {
                    from: from.map(Location::parse),
                };
                require_guest_with_context(&state, &self.paths)
            } else {
                require_auth_with_context(&Location::parse(path), &self.paths)
            }
        })?;

        Ok(decision)
    }

    /// Authenticated call with the stored bearer token attached.
    ///
    /// A 401 forces a logout and reports where to sign in again.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        data: Option<Value>,
        signal: &CancelSignal,
    ) -> CliResult<Value> {
        let Some(token) = self.store.token() else {
            return Err(CliError::not_signed_in(&self.paths.login_path));
        };

        let request = ApiRequest::new(method, endpoint).bearer(&token);
        let outcome: RequestOutcome<Value> = match data {
            Some(data) => self.executor.send_cancellable(request.json(data), signal).await,
            None => self.executor.send_cancellable(request, signal).await,
        };

        match outcome {
            RequestOutcome::Success(value) => Ok(value),
            RequestOutcome::Unauthorized => Err(self.expire_session()),
            RequestOutcome::Failed(e) => Err(e.into()),
            RequestOutcome::Canceled => Err(CliError::canceled()),
        }
    }

    fn expire_session(&self) -> CliError {
        let login_path = if self.store.identity().is_some_and(|i| i.has_role(&self.paths.admin_role))
        {
            &self.paths.admin_login_path
        } else {
            &self.paths.login_path
        };

        if let Err(e) = self.store.logout() {
            error!("Failed to clear expired session: {e}");
        }
        info!("Backend rejected the token; session cleared");

        CliError::session_expired(login_path.as_str())
    }
}

/// JSON rendering of a guard decision for command output.
pub fn decision_json(decision: &RouteDecision) -> Value {
    match decision {
        RouteDecision::Loading => json!({ "decision": "loading" }),
        RouteDecision::Render => json!({ "decision": "render" }),
        RouteDecision::Redirect(redirect) => json!({
            "decision": "redirect",
            "kind": match redirect.kind {
                RedirectKind::Login => "login",
                RedirectKind::AdminLogin => "admin_login",
                RedirectKind::ReturnTo => "return_to",
            },
            "to": redirect.to,
            "from": redirect.state.from.as_ref().map(Location::href),
        }),
    }
}
