use afx_core::{CredentialToken, Identity};

/// Read-only snapshot of the session at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub token: Option<CredentialToken>,
    /// True only until the startup restore has finished
    pub is_loading: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Signed in and carrying `role`
    pub fn has_role(&self, role: &str) -> bool {
        self.identity.as_ref().is_some_and(|i| i.has_role(role))
    }
}
