//! Data models for the Robin API.
//!
//! Every model mirrors the server's JSON field names. Missing fields decode to
//! their defaults, and fields left at their default are not serialized, so a
//! partially filled model can be sent as an update without clearing anything
//! on the server.

// Export submodules
pub mod access_token;
pub mod datetime;
pub mod device;
pub mod envelope;
pub mod event;
pub mod free_busy;
pub mod location;
pub mod organization;
pub mod presence;
pub mod space;
pub mod user;

pub use access_token::AccessToken;
pub use device::{Device, DeviceFeed, DeviceManifest, Identifier};
pub use envelope::{Envelope, FieldErrors, Meta, Paging};
pub use event::{Confirmation, DateTimeZone, Event, Invitee};
pub use free_busy::{Busy, FreeBusy};
pub use location::Location;
pub use organization::{Amenity, Organization};
pub use presence::Presence;
pub use space::{Calendar, Space, SpaceState};
pub use user::{PrimaryEmail, User, UserAccess, UserStatus};

/// Identity fields are never sent as `0`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
