use http::Method;

use super::{require_id, DeviceListBuilder, EventListBuilder, IncludeBuilder, SearchBuilder};
use crate::client::NO_BODY;
use crate::models::{Amenity, Calendar, Event, Presence, Space, SpaceState};
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides methods for managing spaces and everything attached to them.
///
/// # Examples
///
/// ```no_run
/// # async fn example(client: &robin_client::RobinClient) -> robin_client::RobinResult<()> {
/// let space = client.spaces().get(7).include("calendar").send().await?;
/// let state = client.spaces().state(space.id).await?;
/// println!("{space}: {:?}", state.availability);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SpaceHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> SpaceHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    pub fn get(&self, id: i64) -> IncludeBuilder<'a, Space> {
        IncludeBuilder::new(self.client, format!("spaces/{id}"))
    }

    /// Updates a space. Only the fields that are set on `space` are sent.
    pub async fn update(&self, space: &Space) -> RobinResult<()> {
        let endpoint = format!("spaces/{}", require_id("space", space.id)?);
        self.client
            .request_empty(Method::PATCH, &endpoint, &QueryParams::new(), Some(space))
            .await
    }

    pub async fn delete(&self, id: i64) -> RobinResult<()> {
        let endpoint = format!("spaces/{id}");
        self.client
            .request_empty(Method::DELETE, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    pub fn events(&self, id: i64) -> EventListBuilder<'a> {
        EventListBuilder::new(self.client, format!("spaces/{id}/events"))
    }

    /// Books the space.
    pub async fn add_event(&self, id: i64, event: &Event) -> RobinResult<Event> {
        let endpoint = format!("spaces/{id}/events");
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(event))
            .await
    }

    pub async fn amenities(&self, id: i64) -> RobinResult<Vec<Amenity>> {
        let endpoint = format!("spaces/{id}/amenities");
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    pub async fn amenity(&self, id: i64, amenity_id: i64) -> RobinResult<Amenity> {
        let endpoint = format!("spaces/{id}/amenities/{amenity_id}");
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Attaches an existing organization amenity to the space.
    pub async fn add_amenity(&self, id: i64, amenity_id: i64) -> RobinResult<Amenity> {
        let endpoint = format!("spaces/{id}/amenities/{amenity_id}");
        self.client
            .request(Method::PUT, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    pub async fn remove_amenity(&self, id: i64, amenity_id: i64) -> RobinResult<()> {
        let endpoint = format!("spaces/{id}/amenities/{amenity_id}");
        self.client
            .request_empty(Method::DELETE, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    pub fn presence(&self, id: i64) -> SearchBuilder<'a, Presence> {
        SearchBuilder::new(self.client, format!("spaces/{id}/presence"))
    }

    pub async fn add_presence(&self, id: i64, presence: &Presence) -> RobinResult<Presence> {
        let endpoint = format!("spaces/{id}/presence");
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(presence))
            .await
    }

    /// Clears a presence record. The record to clear is sent as the request body.
    pub async fn remove_presence(&self, id: i64, presence: &Presence) -> RobinResult<()> {
        let endpoint = format!("spaces/{id}/presence");
        self.client
            .request_empty(Method::DELETE, &endpoint, &QueryParams::new(), Some(presence))
            .await
    }

    pub fn devices(&self, id: i64) -> DeviceListBuilder<'a> {
        DeviceListBuilder::new(self.client, format!("spaces/{id}/devices"))
    }

    /// Current availability of the space.
    pub async fn state(&self, id: i64) -> RobinResult<SpaceState> {
        let endpoint = format!("spaces/{id}/state");
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    pub async fn calendar(&self, id: i64) -> RobinResult<Calendar> {
        let endpoint = format!("spaces/{id}/calendar");
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Links the space to an external calendar.
    pub async fn set_calendar(&self, id: i64, calendar: &Calendar) -> RobinResult<Calendar> {
        let endpoint = format!("spaces/{id}/calendar");
        self.client
            .request(Method::PUT, &endpoint, &QueryParams::new(), Some(calendar))
            .await
    }
}
