use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Field-level problems reported by the server, keyed by field name.
///
/// Keys are chosen by the server and are not a closed set.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Standard response envelope wrapping every Robin API payload.
///
/// ```json
/// {
///   "meta": { "status_code": 200, "status": "OK", "message": "" },
///   "data": [ ... ],
///   "paging": { "page": 1, "per_page": 10 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Status information about the response. A body without it is not an
    /// envelope, even if it is JSON.
    pub meta: Meta,

    /// The payload. Only present on success.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Pagination details, returned by list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            meta: Meta::default(),
            data: None,
            paging: None,
        }
    }
}

/// Status block of an [`Envelope`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Status code as reported by the server. May differ from the HTTP status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_code: i64,

    /// Short status word, e.g. `"OK"` or `"BAD_REQUEST"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    /// Human-readable message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    /// Validation detail, field name to list of problems.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub more_info: FieldErrors,
}

/// Pagination block of an [`Envelope`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// The current page, starting at 1.
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: i64,

    /// Number of results per page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_page: i64,
}

// The server sends explicit nulls for meta members it has nothing to say about.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
