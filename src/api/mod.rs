//! Endpoint handlers, one per resource family.
//!
//! Handlers borrow the [`RobinClient`](crate::RobinClient) and map each
//! operation onto a verb, a path and its parameters. Endpoints with optional
//! filters return a builder; call `.send()` to execute it.

use std::fmt::Display;

mod auth;
mod device_manifests;
mod devices;
mod events;
mod free_busy;
mod list;
mod locations;
mod me;
mod organizations;
mod spaces;
mod users;

pub use auth::AuthHandler;
pub use device_manifests::DeviceManifestHandler;
pub use devices::DeviceHandler;
pub use events::EventHandler;
pub use free_busy::{FreeBusyHandler, FreeBusySpacesBuilder, DEFAULT_DURATION};
pub use list::{
    DeviceListBuilder, EventListBuilder, IncludeBuilder, PagedBuilder, SearchBuilder,
    DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
pub use locations::{LocationHandler, LocationPresenceBuilder};
pub use me::MeHandler;
pub use organizations::{OrganizationHandler, UserListBuilder};
pub use spaces::SpaceHandler;
pub use users::UserHandler;

/// Encodes a caller-supplied id or slug for use as one path segment.
pub(crate) fn segment(id: impl Display) -> String {
    crate::query::encode(&id.to_string())
}

/// Fails when a model sent to an update endpoint has no identity.
pub(crate) fn require_id(kind: &str, id: i64) -> crate::RobinResult<i64> {
    if id == 0 {
        return Err(crate::RobinError::InvalidEndpoint(format!(
            "{kind} id is required for updates"
        )));
    }
    Ok(id)
}
