//! Route guards: pure decisions between rendering a view and redirecting,
//! made from a session snapshot and the requested location.

pub(crate) mod location;
pub(crate) mod require_auth;
pub(crate) mod require_guest;
pub(crate) mod route_decision;
pub(crate) mod route_paths;

#[cfg(test)]
mod tests;

pub use location::{Location, LocationState};
pub use require_auth::{require_auth, require_auth_with_context};
pub use require_guest::{require_guest, require_guest_with_context};
pub use route_decision::{Redirect, RedirectKind, RouteDecision};
pub use route_paths::RoutePaths;
