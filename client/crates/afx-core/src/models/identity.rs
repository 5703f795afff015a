use crate::Role;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The authenticated principal as returned by the backend.
///
/// Only the fields the session core reasons about are typed. Everything else
/// the backend sends (address, phone, balances, ...) lands in `profile` and is
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub email: String,
    #[serde(default, alias = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Identity {
    pub fn new(id: i64, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: None,
            last_name: None,
            role,
            profile: Map::new(),
        }
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    /// "First Last", falling back to the email when no name is on record.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.matches(role)
    }

    /// Opaque profile attribute lookup.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.profile.get(key)
    }
}

/// Numeric id, also accepted as a string such as `"7"`
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid identity id '{text}'"))),
    }
}
