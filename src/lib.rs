//! # robin-client
//!
//! A Rust client library for the [Robin](https://robinpowered.com) workplace
//! and space management API.
//!
//! The crate provides typed models, request builders and error translation for
//! organizations, locations, spaces, users, devices, events, presence and
//! free-busy search.
//!
//! ## Features
//!
//! - Typed models that tolerate partial server responses
//! - Partial updates: unset model fields are never sent
//! - Field-level validation errors surfaced as a map
//! - Async API on top of `reqwest`
//!
//! ## Example
//!
//! ```rust,no_run
//! use robin_client::RobinClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RobinClient::builder()
//!         .api_key_from_env("ROBIN_API_KEY")
//!         .build()?;
//!
//!     let locations = client
//!         .organizations()
//!         .locations("acme")
//!         .query("HQ")
//!         .per_page(25)
//!         .send()
//!         .await?;
//!
//!     for location in locations {
//!         let spaces = client.locations().spaces(location.id).send().await?;
//!         println!("{location}: {} spaces", spaces.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Failed calls return [`RobinError`]. Validation failures carry the server's
//! field details:
//!
//! ```rust,no_run
//! # use robin_client::{RobinClient, RobinError};
//! # use robin_client::models::User;
//! # async fn example(client: &RobinClient) {
//! match client.organizations().add_users("acme", &[User::invite("not-an-email")]).await {
//!     Ok(users) => println!("invited {}", users.len()),
//!     Err(err @ RobinError::Api { .. }) => {
//!         for problem in err.field_errors("email") {
//!             eprintln!("email: {problem}");
//!         }
//!     }
//!     Err(other) => eprintln!("request failed: {other}"),
//! }
//! # }
//! ```

mod api;
mod client;
mod error;
pub mod models;
mod query;

pub use api::{
    AuthHandler, DeviceHandler, DeviceListBuilder, DeviceManifestHandler, EventHandler,
    EventListBuilder, FreeBusyHandler, FreeBusySpacesBuilder, IncludeBuilder,
    LocationHandler, LocationPresenceBuilder, MeHandler, OrganizationHandler, PagedBuilder,
    SearchBuilder, SpaceHandler, UserHandler, UserListBuilder, DEFAULT_DURATION, DEFAULT_PAGE,
    DEFAULT_PER_PAGE,
};
pub use client::{RobinClient, RobinClientBuilder, DEFAULT_BASE_URL};
pub use error::{RobinError, RobinResult};
pub use query::QueryParams;
