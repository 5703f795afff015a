use crate::LocationState;

/// Why a guard redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    /// Signed out, general area
    Login,
    /// Signed out or missing the admin role, admin area
    AdminLogin,
    /// Already signed in on a guest-only page
    ReturnTo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub kind: RedirectKind,
    pub to: String,
    pub state: LocationState,
}

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Startup restore has not finished; show a neutral loading indicator
    Loading,
    /// Render the guarded children
    Render,
    Redirect(Redirect),
}

impl RouteDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }

    /// Target path of a redirect, if this is one
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect().map(|r| r.to.as_str())
    }
}
