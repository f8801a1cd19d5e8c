use std::fmt::Display;

use http::Method;

use super::{segment, EventListBuilder};
use crate::client::NO_BODY;
use crate::models::{Presence, User};
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides methods for looking up users.
///
/// For the authenticated user, see [`MeHandler`](crate::MeHandler).
#[derive(Debug)]
pub struct UserHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> UserHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    /// Retrieves a user by id or slug.
    pub async fn get(&self, id: impl Display) -> RobinResult<User> {
        let endpoint = format!("users/{}", segment(id));
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Lists where a user is currently present.
    pub async fn presence(&self, id: impl Display) -> RobinResult<Vec<Presence>> {
        let endpoint = format!("users/{}/presence", segment(id));
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Lists a user's events.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &robin_client::RobinClient) -> robin_client::RobinResult<()> {
    /// use chrono::{Duration, Local};
    ///
    /// let now = Local::now().fixed_offset();
    /// let events = client
    ///     .users()
    ///     .events("ada")
    ///     .after(now)
    ///     .before(now + Duration::days(7))
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn events(&self, id: impl Display) -> EventListBuilder<'a> {
        EventListBuilder::new(self.client, format!("users/{}/events", segment(id)))
    }
}
