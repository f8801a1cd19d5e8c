use http::Method;

use super::EventListBuilder;
use crate::client::NO_BODY;
use crate::models::{Device, Organization, Presence, User};
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides methods scoped to the user who owns the access token.
#[derive(Debug)]
pub struct MeHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> MeHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> RobinResult<User> {
        self.client
            .request(Method::GET, "me", &QueryParams::new(), NO_BODY)
            .await
    }

    /// Lists where the current user is present.
    pub async fn presence(&self) -> RobinResult<Vec<Presence>> {
        self.client
            .request(Method::GET, "me/presence", &QueryParams::new(), NO_BODY)
            .await
    }

    /// Lists the current user's events.
    pub fn events(&self) -> EventListBuilder<'a> {
        EventListBuilder::new(self.client, "me/events".to_string())
    }

    /// Lists the organizations the current user belongs to.
    pub async fn organizations(&self) -> RobinResult<Vec<Organization>> {
        self.client
            .request(Method::GET, "me/organizations", &QueryParams::new(), NO_BODY)
            .await
    }

    /// Registers a new device owned by the current user.
    pub async fn add_device(&self, device: &Device) -> RobinResult<Device> {
        self.client
            .request(Method::POST, "me/devices", &QueryParams::new(), Some(device))
            .await
    }
}
