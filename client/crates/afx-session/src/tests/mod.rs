
use afx_core::{CredentialToken, Identity, Role};

pub(crate) fn trader(id: i64) -> Identity {
    Identity::new(id, format!("trader{id}@example.com"), Role::User).with_name("Ada", "Lovelace")
}

pub(crate) fn admin(id: i64) -> Identity {
    Identity::new(id, format!("ops{id}@example.com"), Role::Admin)
}

pub(crate) fn token(value: &str) -> CredentialToken {
    CredentialToken::new(value).unwrap()
}
