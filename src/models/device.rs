use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{datetime, is_zero};

/// A piece of hardware registered with Robin: a beacon, sensor, display, phone...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(skip_serializing_if = "is_zero")]
    pub account_id: i64,

    #[serde(skip_serializing_if = "is_zero")]
    pub device_manifest_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub last_reported_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<Identifier>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_manifest: Option<DeviceManifest>,
}

/// A hardware identifier (MAC address, iBeacon UUID, ...) attached to a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifier {
    /// Uniform resource name of the identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urn: Option<String>,

    /// Interface the identifier belongs to, e.g. `"bluetooth"` or `"wifi"`.
    #[serde(rename = "interface", skip_serializing_if = "Option::is_none")]
    pub interface_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Describes a family of supported devices and the data feeds they publish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceManifest {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_relay: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_publisher_type: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_feeds: Option<Vec<DeviceFeed>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceFeed {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(skip_serializing_if = "is_zero")]
    pub device_manifest_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unit of the values published on the feed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}
