use std::fmt::Display;

use http::Method;

use super::{segment, PagedBuilder};
use crate::client::NO_BODY;
use crate::models::DeviceManifest;
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides access to the catalogue of supported device types.
#[derive(Debug)]
pub struct DeviceManifestHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> DeviceManifestHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    /// Lists supported device manifests.
    pub fn list(&self) -> PagedBuilder<'a, DeviceManifest> {
        PagedBuilder::new(self.client, "device-manifests".to_string())
    }

    /// Retrieves a device manifest by id or slug.
    pub async fn get(&self, id: impl Display) -> RobinResult<DeviceManifest> {
        let endpoint = format!("device-manifests/{}", segment(id));
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }
}
