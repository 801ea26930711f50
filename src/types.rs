//! Records shared by several resource families.

use serde::{Deserialize, Serialize};

/// Declares a string enum the service may extend.
///
/// Values outside the listed set decode to `Unknown(raw)` and encode back to `raw`,
/// so records read from the service can be sent back unchanged.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown(other) => other.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::from(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                let known = match value.as_str() {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                };
                known.unwrap_or_else(|| $name::Unknown(value))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(other) => other,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

/// Arbitrary JSON object attached to workspaces, entities, values and dialog nodes.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Paging links returned with every collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pagination {
    #[serde(default)]
    pub refresh_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl Pagination {
    /// Whether another page can be requested with `next_cursor`.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some() || self.next_url.is_some()
    }
}

/// Paging links for log queries, which have no refresh link or totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogPagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// An entity annotated inside an intent example.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Mention {
    pub entity: String,
    /// Zero-based `[start, end)` character offsets into the example text.
    pub location: Vec<i64>,
}

impl Mention {
    pub fn new(entity: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            entity: entity.into(),
            location: vec![start, end],
        }
    }
}

/// Outbound webhook called by dialog nodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Webhook {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<WebhookHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebhookHeader {
    pub name: String,
    pub value: String,
}
