//! Query string construction.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset};
use url::form_urlencoded::byte_serialize;

use crate::models::datetime;

/// Ordered set of query parameters for one request.
///
/// Parameters are only recorded when they have a value, so an unset filter
/// never shows up as `key=` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter that is always sent (page numbers, durations).
    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Adds a parameter only when it is set and not empty.
    pub fn push_opt<V: Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key, value));
            }
        }
        self
    }

    /// Adds a comma separated list, only when it has at least one element.
    pub fn push_list<V: Display>(&mut self, key: &'static str, values: &[V]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key, joined));
        }
        self
    }

    /// Adds an instant in the API's timestamp format, only when set.
    pub fn push_datetime(
        &mut self,
        key: &'static str,
        value: Option<&DateTime<FixedOffset>>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key, datetime::format(value)));
        }
        self
    }

    /// Adds the `page`/`per_page` pair every paginated endpoint takes.
    pub fn push_paging(&mut self, page: u32, per_page: u32) -> &mut Self {
        self.push("page", page).push("per_page", per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Renders `?k=v&k2=v2`, or an empty string when there are no parameters.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let rendered = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{rendered}")
    }
}

/// Percent-encodes a query component or path segment.
///
/// Spaces become `%20` rather than the form-encoding `+`; a literal `+` is
/// already escaped as `%2B` by the serializer, so the substitution is lossless.
pub(crate) fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
