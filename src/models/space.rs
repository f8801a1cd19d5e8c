use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{datetime, is_zero, Location};

/// A bookable or trackable area inside a location, such as a meeting room or desk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(skip_serializing_if = "is_zero")]
    pub location_id: i64,

    /// Floor the space is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Radius in meters within which presence is reported for the space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_radius: Option<f64>,

    /// Number of people the space holds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,

    /// Space kind, e.g. `"meeting"`, `"desk"`, `"phonebooth"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub last_presence_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dibsed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_accessible: Option<bool>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// Parent location, when requested with `include`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Box<Location>>,

    /// Linked calendar, when requested with `include`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Calendar>,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.id),
            None => write!(f, "space {}", self.id),
        }
    }
}

/// Current occupancy of a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceState {
    /// `"available"`, `"booked"`, `"occupied"`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Number of people currently present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present: Option<i64>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub next_busy_change: Option<DateTime<FixedOffset>>,
}

/// External calendar linked to a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calendar {
    #[serde(skip_serializing_if = "is_zero")]
    pub space_id: i64,

    /// Calendar provider, e.g. `"google_calendar"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_resource_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_resource_email: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub subscriber_expires_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}
