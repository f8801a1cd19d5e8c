use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{datetime, Event, Space, User};

/// One entry of a free-busy search, in best-fit order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeBusy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_presence: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Space>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Busy windows within the searched range. Gaps between them are free.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy: Option<Vec<Busy>>,
}

impl FreeBusy {
    /// True if nothing is booked in the searched range.
    pub fn is_free(&self) -> bool {
        self.busy.as_ref().map_or(true, Vec::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Busy {
    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<FixedOffset>>,

    #[serde(with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}
