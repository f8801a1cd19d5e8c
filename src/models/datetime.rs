//! The fixed timestamp format used by the Robin API.
//!
//! Instants are written as `yyyy-MM-ddTHH:mm:sszzz`, i.e. second precision with
//! an explicit numeric UTC offset (`2024-03-01T09:30:00-05:00`). The same text
//! is used inside JSON bodies and in query parameters.

use chrono::{DateTime, FixedOffset, ParseResult};

/// `strftime` pattern for the wire format.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Formats an instant in the wire format, preserving its offset.
///
/// The format has whole seconds only; any sub-second part of `value` is
/// truncated, not rounded, so a formatted instant may compare earlier than the
/// original once parsed back.
pub fn format<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    value.format(FORMAT).to_string()
}

/// Parses a timestamp in the wire format.
///
/// RFC 3339 input (a `Z` suffix, fractional seconds) is accepted as well since
/// some server fields are emitted that way.
pub fn parse(value: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, FORMAT).or_else(|_| DateTime::parse_from_rfc3339(value))
}

/// Serde adapter for `Option<DateTime<FixedOffset>>` fields.
///
/// Missing fields and `null` both decode to `None`; `None` is skipped by the
/// models via `skip_serializing_if`.
pub mod option {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&super::format(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.is_empty() => super::parse(&text)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid timestamp '{text}': {e}"))),
            _ => Ok(None),
        }
    }
}
