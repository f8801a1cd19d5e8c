use http::Method;

use super::{require_id, IncludeBuilder};
use crate::client::NO_BODY;
use crate::models::{Confirmation, Event};
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides methods for managing calendar events and their check-ins.
///
/// Events are created per space with
/// [`SpaceHandler::add_event`](crate::SpaceHandler::add_event).
#[derive(Debug)]
pub struct EventHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> EventHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    /// Retrieves an event. Use `.include("space")` to embed the booked space.
    pub fn get(&self, id: i64) -> IncludeBuilder<'a, Event> {
        IncludeBuilder::new(self.client, format!("events/{id}"))
    }

    /// Updates an event. Only the fields that are set on `event` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`RobinError::InvalidEndpoint`](crate::RobinError::InvalidEndpoint)
    /// without making a request if `event.id` is not set.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &robin_client::RobinClient) -> robin_client::RobinResult<()> {
    /// use robin_client::models::Event;
    ///
    /// let rename = Event {
    ///     id: 42,
    ///     title: Some("Quarterly review".into()),
    ///     ..Event::default()
    /// };
    /// client.events().update(&rename).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update(&self, event: &Event) -> RobinResult<()> {
        let endpoint = format!("events/{}", require_id("event", event.id)?);
        self.client
            .request_empty(Method::PATCH, &endpoint, &QueryParams::new(), Some(event))
            .await
    }

    /// Retrieves the check-in for an event.
    pub async fn confirmation(&self, id: i64) -> RobinResult<Confirmation> {
        let endpoint = format!("events/{id}/confirmation");
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Checks in to an event on behalf of a user or device.
    pub async fn confirm(&self, id: i64, confirmation: &Confirmation) -> RobinResult<Confirmation> {
        let endpoint = format!("events/{id}/confirmation");
        self.client
            .request(Method::PUT, &endpoint, &QueryParams::new(), Some(confirmation))
            .await
    }

    /// Removes the check-in for an event.
    pub async fn remove_confirmation(&self, id: i64) -> RobinResult<()> {
        let endpoint = format!("events/{id}/confirmation");
        self.client
            .request_empty(Method::DELETE, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Cancels an event.
    pub async fn delete(&self, id: i64) -> RobinResult<()> {
        let endpoint = format!("events/{id}");
        self.client
            .request_empty(Method::DELETE, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }
}
