use http::Method;

use super::{
    require_id, DeviceListBuilder, EventListBuilder, SearchBuilder, DEFAULT_PAGE,
    DEFAULT_PER_PAGE,
};
use crate::client::NO_BODY;
use crate::models::{Location, Presence, Space};
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides methods for managing locations (buildings, floors, offices).
#[derive(Debug)]
pub struct LocationHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> LocationHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: i64) -> RobinResult<Location> {
        let endpoint = format!("locations/{id}");
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Updates a location. Only the fields that are set on `location` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`RobinError::InvalidEndpoint`](crate::RobinError::InvalidEndpoint)
    /// when `location.id` is not set.
    pub async fn update(&self, location: &Location) -> RobinResult<()> {
        let endpoint = format!("locations/{}", require_id("location", location.id)?);
        self.client
            .request_empty(Method::PATCH, &endpoint, &QueryParams::new(), Some(location))
            .await
    }

    /// Lists the spaces at a location.
    pub fn spaces(&self, id: i64) -> SearchBuilder<'a, Space> {
        SearchBuilder::new(self.client, format!("locations/{id}/spaces"))
    }

    pub async fn create_space(&self, id: i64, space: &Space) -> RobinResult<Space> {
        let endpoint = format!("locations/{id}/spaces");
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(space))
            .await
    }

    /// Lists who is present at a location.
    pub fn presence(&self, id: i64) -> LocationPresenceBuilder<'a> {
        LocationPresenceBuilder::new(self.client, format!("locations/{id}/presence"))
    }

    pub async fn add_presence(&self, id: i64, presence: &Presence) -> RobinResult<Presence> {
        let endpoint = format!("locations/{id}/presence");
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(presence))
            .await
    }

    /// Clears a presence record. The record to clear is sent as the request body.
    pub async fn remove_presence(&self, id: i64, presence: &Presence) -> RobinResult<()> {
        let endpoint = format!("locations/{id}/presence");
        self.client
            .request_empty(Method::DELETE, &endpoint, &QueryParams::new(), Some(presence))
            .await
    }

    pub fn devices(&self, id: i64) -> DeviceListBuilder<'a> {
        DeviceListBuilder::new(self.client, format!("locations/{id}/devices"))
    }

    /// Lists events booked in any space at the location.
    pub fn events(&self, id: i64) -> EventListBuilder<'a> {
        EventListBuilder::new(self.client, format!("locations/{id}/events"))
    }
}

/// Lists presence at a location, optionally limited to some of its spaces.
#[derive(Debug)]
pub struct LocationPresenceBuilder<'a> {
    client: &'a RobinClient,
    endpoint: String,
    query: Option<String>,
    space_ids: Vec<i64>,
    page: u32,
    per_page: u32,
}

impl<'a> LocationPresenceBuilder<'a> {
    pub(crate) fn new(client: &'a RobinClient, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            query: None,
            space_ids: Vec::new(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Only return presence in these spaces.
    pub fn space_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.space_ids.extend(ids);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub async fn send(self) -> RobinResult<Vec<Presence>> {
        let mut query = QueryParams::new();
        query
            .push_opt("query", self.query.as_deref())
            .push_paging(self.page, self.per_page)
            .push_list("spaceIds", &self.space_ids);

        self.client
            .request(Method::GET, &self.endpoint, &query, NO_BODY)
            .await
    }
}
