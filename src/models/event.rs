use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{datetime, is_zero, Space};

/// A calendar event booked in a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,

    #[serde(skip_serializing_if = "is_zero")]
    pub space_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-text location as entered in the calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_event_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_type: Option<String>,

    /// iCalendar UID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTimeZone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTimeZone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_id: Option<String>,

    /// `"confirmed"`, `"tentative"` or `"cancelled"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// RRULE/EXDATE lines for recurring events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_all_day: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitees: Option<Vec<Invitee>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,

    /// The booked space, when requested with `include`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Box<Space>>,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.title.as_deref().unwrap_or("(untitled)");
        match self.start.as_ref().and_then(|s| s.date_time) {
            Some(start) => write!(f, "{title} at {}", datetime::format(&start)),
            None => write!(f, "{title}"),
        }
    }
}

/// An instant paired with the IANA time zone it was scheduled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeZone {
    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,

    /// IANA zone name, e.g. `"America/New_York"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateTimeZone {
    pub fn new(date_time: DateTime<FixedOffset>, time_zone: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time),
            time_zone: Some(time_zone.into()),
        }
    }
}

/// Someone invited to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invitee {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// `"accepted"`, `"declined"`, `"tentative"` or `"needs_action"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_organizer: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_resource: Option<bool>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Check-in for an event by a user or device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Confirmation {
    #[serde(skip_serializing_if = "is_zero")]
    pub event_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<FixedOffset>>,
}
