use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const ADMIN_ROLE: &str = "admin";
pub const USER_ROLE: &str = "user";

/// Role indicator carried by an identity.
///
/// The backend sends the role as a free-form string. `admin` is the only
/// value the client treats specially; anything unknown is preserved verbatim
/// so it survives a persist/restore cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    #[default]
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => ADMIN_ROLE,
            Self::User => USER_ROLE,
            Self::Other(value) => value,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Case-insensitive comparison against a configured role name.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(ADMIN_ROLE) {
            Self::Admin
        } else if trimmed.eq_ignore_ascii_case(USER_ROLE) || trimmed.is_empty() {
            Self::User
        } else {
            Self::Other(trimmed.to_string())
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawRole>::deserialize(deserializer)? {
            Some(RawRole::Name(name)) => Role::from(name.as_str()),
            Some(RawRole::Code(code)) => Role::from(code.to_string().as_str()),
            None => Role::default(),
        })
    }
}

/// Backends send the role either by name or as a numeric code
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRole {
    Name(String),
    Code(serde_json::Number),
}
