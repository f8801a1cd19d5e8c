use std::fmt::Display;

use http::Method;

use super::{segment, DeviceListBuilder, SearchBuilder, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::client::NO_BODY;
use crate::models::{Amenity, Location, Organization, User};
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides methods for an organization and the resources it owns.
///
/// Every method takes the organization's numeric id or its slug.
#[derive(Debug)]
pub struct OrganizationHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> OrganizationHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    /// Retrieves an organization.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &robin_client::RobinClient) -> robin_client::RobinResult<()> {
    /// let by_slug = client.organizations().get("acme").await?;
    /// let by_id = client.organizations().get(by_slug.id).await?;
    /// assert_eq!(by_slug.id, by_id.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, id: impl Display) -> RobinResult<Organization> {
        let endpoint = format!("organizations/{}", segment(id));
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Lists the organization's locations.
    pub fn locations(&self, id: impl Display) -> SearchBuilder<'a, Location> {
        SearchBuilder::new(self.client, format!("organizations/{}/locations", segment(id)))
    }

    /// Creates a location in the organization.
    pub async fn create_location(
        &self,
        id: impl Display,
        location: &Location,
    ) -> RobinResult<Location> {
        let endpoint = format!("organizations/{}/locations", segment(id));
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(location))
            .await
    }

    /// Lists the organization's members.
    pub fn users(&self, id: impl Display) -> UserListBuilder<'a> {
        UserListBuilder::new(self.client, format!("organizations/{}/users", segment(id)))
    }

    /// Invites users to the organization. Each user needs at least an email.
    ///
    /// Validation problems are reported per field, see
    /// [`RobinError::field_errors`](crate::RobinError::field_errors).
    pub async fn add_users(&self, id: impl Display, users: &[User]) -> RobinResult<Vec<User>> {
        let endpoint = format!("organizations/{}/users", segment(id));
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(users))
            .await
    }

    /// Retrieves one member of the organization.
    pub async fn user(&self, id: impl Display, user_id: impl Display) -> RobinResult<User> {
        let endpoint = format!("organizations/{}/users/{}", segment(id), segment(user_id));
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Lists the amenities defined by the organization.
    pub async fn amenities(&self, id: impl Display) -> RobinResult<Vec<Amenity>> {
        let endpoint = format!("organizations/{}/amenities", segment(id));
        self.client
            .request(Method::GET, &endpoint, &QueryParams::new(), NO_BODY)
            .await
    }

    /// Defines a new amenity for the organization.
    pub async fn add_amenity(&self, id: impl Display, amenity: &Amenity) -> RobinResult<Amenity> {
        let endpoint = format!("organizations/{}/amenities", segment(id));
        self.client
            .request(Method::POST, &endpoint, &QueryParams::new(), Some(amenity))
            .await
    }

    /// Lists the devices registered in the organization.
    pub fn devices(&self, id: impl Display) -> DeviceListBuilder<'a> {
        DeviceListBuilder::new(self.client, format!("organizations/{}/devices", segment(id)))
    }
}

/// Lists organization members, optionally filtered by name or id.
#[derive(Debug)]
pub struct UserListBuilder<'a> {
    client: &'a RobinClient,
    endpoint: String,
    query: Option<String>,
    ids: Vec<i64>,
    page: u32,
    per_page: u32,
}

impl<'a> UserListBuilder<'a> {
    pub(crate) fn new(client: &'a RobinClient, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            query: None,
            ids: Vec::new(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Only return users whose name matches.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Only return the users with these ids.
    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids.extend(ids);
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

    pub async fn send(self) -> RobinResult<Vec<User>> {
        let mut query = QueryParams::new();
        query
            .push_opt("query", self.query.as_deref())
            .push_paging(self.page, self.per_page)
            .push_list("ids", &self.ids);

        self.client
            .request(Method::GET, &self.endpoint, &query, NO_BODY)
            .await
    }
}
