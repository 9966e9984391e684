//! Tab identity

use serde::{Deserialize, Serialize};

/// Opaque identity naming a tab within a group.
///
/// Supplied by whoever owns the tab list; units never generate one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabId {
    Number(i64),
    Text(String),
}

impl TabId {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TabId::Text(s) => Some(s),
            TabId::Number(_) => None,
        }
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabId::Number(n) => write!(f, "{}", n),
            TabId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        TabId::Text(value.to_string())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        TabId::Text(value)
    }
}

impl From<i64> for TabId {
    fn from(value: i64) -> Self {
        TabId::Number(value)
    }
}

impl From<i32> for TabId {
    fn from(value: i32) -> Self {
        TabId::Number(i64::from(value))
    }
}
