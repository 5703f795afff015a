use std::fmt;

use serde::{Deserialize, Serialize};

/// A requested location: pathname plus the raw query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Includes the leading `?` when present, empty otherwise
    #[serde(default)]
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: String::new(),
        }
    }

    /// Split an href such as `/orders?page=2#top` into pathname and search.
    /// The fragment is dropped.
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);

        let (pathname, search) = match href.find('?') {
            Some(idx) => (&href[..idx], &href[idx..]),
            None => (href, ""),
        };

        let pathname = if pathname.is_empty() { "/" } else { pathname };

        Self {
            pathname: pathname.to_string(),
            search: if search == "?" { String::new() } else { search.to_string() },
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}

/// Navigation state carried along with a redirect.
///
/// Login redirects record the location the user asked for in `from` so the
/// login page can send them back once they are signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
    #[serde(default)]
    pub from: Option<Location>,
}

impl LocationState {
    pub fn from_location(location: Location) -> Self {
        Self {
            from: Some(location),
        }
    }
}
