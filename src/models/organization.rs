use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{datetime, is_zero};

/// A Robin organization (account).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_organization: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL-friendly identifier, usable anywhere an organization id is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.slug) {
            (Some(name), Some(slug)) => write!(f, "{name} ({slug})"),
            (Some(name), None) => write!(f, "{name}"),
            _ => write!(f, "organization {}", self.id),
        }
    }
}

/// A feature of a space, such as a projector or whiteboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenity {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    /// Owning organization. `None` for amenities shared by every account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}
