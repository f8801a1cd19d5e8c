use http::Method;

use super::SearchBuilder;
use crate::client::NO_BODY;
use crate::models::{Device, Identifier, Space};
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides methods for managing devices.
///
/// Devices are registered through [`MeHandler::add_device`](crate::MeHandler::add_device)
/// and listed per organization, location or space.
#[derive(Debug)]
pub struct DeviceHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> DeviceHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: i64) -> RobinResult<Device> {
        let endpoint = format!("devices/{id}");
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Attaches a hardware identifier (MAC address, beacon UUID, ...) to a device.
    pub async fn add_identifier(
        &self,
        id: i64,
        identifier: &Identifier,
    ) -> RobinResult<Identifier> {
        let endpoint = format!("devices/{id}/identifiers");
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(identifier))
            .await
    }

    /// Lists the spaces a device is in.
    pub fn spaces(&self, id: i64) -> SearchBuilder<'a, Space> {
        SearchBuilder::new(self.client, format!("devices/{id}/spaces"))
    }

    /// Removes a device. This cannot be undone.
    pub async fn delete(&self, id: i64) -> RobinResult<()> {
        let endpoint = format!("devices/{id}");
        self.client
            .request_empty(Method::DELETE, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }
}
