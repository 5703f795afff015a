use crate::{Location, LocationState, Redirect, RedirectKind, RouteDecision, RoutePaths};

use afx_session::{Session, SessionResult, use_session};

use log::debug;

/// Guard for views that need a signed-in user.
///
/// Evaluation order:
/// 1. Restore still running: [`RouteDecision::Loading`], no redirect
/// 2. Admin area without the admin role (signed in or not): admin login
/// 3. Signed out anywhere else: general login
/// 4. Otherwise: render
///
/// Login redirects carry the requested location in `state.from`.
pub fn require_auth(session: &Session, location: &Location, paths: &RoutePaths) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Loading;
    }

    if paths.is_admin_path(&location.pathname) {
        if session.is_authenticated() && session.has_role(&paths.admin_role) {
            return RouteDecision::Render;
        }

        debug!("Admin area {location} requires role '{}'", paths.admin_role);
        return to_login(RedirectKind::AdminLogin, &paths.admin_login_path, location);
    }

    if !session.is_authenticated() {
        debug!("{location} requires a signed-in user");
        return to_login(RedirectKind::Login, &paths.login_path, location);
    }

    RouteDecision::Render
}

/// [`require_auth`] against the session of the current provider scope.
#[track_caller]
pub fn require_auth_with_context(
    location: &Location,
    paths: &RoutePaths,
) -> SessionResult<RouteDecision> {
    let ctx = use_session()?;
    Ok(require_auth(ctx.session(), location, paths))
}

fn to_login(kind: RedirectKind, to: &str, location: &Location) -> RouteDecision {
    RouteDecision::Redirect(Redirect {
        kind,
        to: to.to_string(),
        state: LocationState::from_location(location.clone()),
    })
}
