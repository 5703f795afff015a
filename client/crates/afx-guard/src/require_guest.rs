use crate::{Location, LocationState, Redirect, RedirectKind, RouteDecision, RoutePaths};

use afx_session::{Session, SessionResult, use_session};

use log::debug;

/// Guard for login and signup views: only signed-out users see them.
///
/// A signed-in user is sent back to `state.from`, or to the landing path when
/// nothing was recorded. A recorded location is ignored in favour of the
/// landing path when it is not an in-app path, or when following it would
/// bounce straight back: a login page, or the admin area for an identity
/// without the admin role.
pub fn require_guest(session: &Session, state: &LocationState, paths: &RoutePaths) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Loading;
    }

    if !session.is_authenticated() {
        return RouteDecision::Render;
    }

    let to = match &state.from {
        Some(from) if returnable(session, from, paths) => from.href(),
        Some(from) => {
            debug!("Ignoring return location {from}, using {}", paths.landing_path);
            paths.landing_path.clone()
        }
        None => paths.landing_path.clone(),
    };

    RouteDecision::Redirect(Redirect {
        kind: RedirectKind::ReturnTo,
        to,
        state: LocationState::default(),
    })
}

/// [`require_guest`] against the session of the current provider scope.
#[track_caller]
pub fn require_guest_with_context(
    state: &LocationState,
    paths: &RoutePaths,
) -> SessionResult<RouteDecision> {
    let ctx = use_session()?;
    Ok(require_guest(ctx.session(), state, paths))
}

fn returnable(session: &Session, from: &Location, paths: &RoutePaths) -> bool {
    if !is_app_relative(&from.pathname) || paths.is_login_path(&from.pathname) {
        return false;
    }

    !paths.is_admin_path(&from.pathname) || session.has_role(&paths.admin_role)
}

/// A single leading `/`; `//host` and `/\host` are protocol-relative in browsers
fn is_app_relative(pathname: &str) -> bool {
    pathname.starts_with('/') && !pathname.starts_with("//") && !pathname.starts_with("/\\")
}
