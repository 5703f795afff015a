mod require_auth;
mod require_guest;
mod route_paths;

use afx_core::{CredentialToken, Identity, Role};
use afx_session::Session;

pub(crate) fn loading(authenticated: bool) -> Session {
    Session {
        is_loading: true,
        ..if authenticated { member() } else { signed_out() }
    }
}

pub(crate) fn signed_out() -> Session {
    Session::default()
}

pub(crate) fn member() -> Session {
    signed_in(Identity::new(1, "trader@example.com", Role::User))
}

pub(crate) fn admin() -> Session {
    signed_in(Identity::new(2, "ops@example.com", Role::Admin))
}

fn signed_in(identity: Identity) -> Session {
    Session {
        identity: Some(identity),
        token: Some(CredentialToken::new("tok-abc").unwrap()),
        is_loading: false,
    }
}
