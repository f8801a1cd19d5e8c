use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{datetime, is_zero, Device, User};

/// A user or device being present in a location or space.
///
/// When posting presence, set either `user_id` or `device_id`; the server
/// fills in the timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presence {
    #[serde(skip_serializing_if = "is_zero")]
    pub location_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub arrived_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<DateTime<FixedOffset>>,

    /// Seconds the presence stays active without a new report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_ttl: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Opaque reference for presence reported by third-party systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ref: Option<String>,
}

impl Presence {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn for_device(device_id: i64) -> Self {
        Self {
            device_id: Some(device_id),
            ..Self::default()
        }
    }
}
