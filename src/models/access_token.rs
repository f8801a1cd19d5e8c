use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{datetime, is_zero};

/// Details about the access token the client authenticates with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    /// The token itself. Only returned when the token is first created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Token kind, e.g. `"personal"` or `"app"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// IP address the token was created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// User agent the token was created with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,

    /// Permission scopes granted to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<DateTime<FixedOffset>>,

    /// When the token stops working. `None` for tokens that never expire.
    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl AccessToken {
    /// Returns true if the token carries the given scope.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes
            .as_deref()
            .is_some_and(|scopes| scopes.iter().any(|s| s == scope))
    }
}
