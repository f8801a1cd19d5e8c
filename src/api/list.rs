//! Request builders shared by several endpoints.

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, FixedOffset};
use http::Method;
use serde::de::DeserializeOwned;

use crate::client::NO_BODY;
use crate::models::{Device, Event};
use crate::{QueryParams, RobinClient, RobinResult};

/// First page, as the API counts them.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none is given.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Lists a paginated collection.
pub struct PagedBuilder<'a, T> {
    client: &'a RobinClient,
    endpoint: String,
    page: u32,
    per_page: u32,
    _item: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for PagedBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedBuilder")
            .field("endpoint", &self.endpoint)
            .field("page", &self.page)
            .field("per_page", &self.per_page)
            .finish()
    }
}

impl<'a, T: DeserializeOwned> PagedBuilder<'a, T> {
    pub(crate) fn new(client: &'a RobinClient, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            _item: PhantomData,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub async fn send(self) -> RobinResult<Vec<T>> {
        let mut query = QueryParams::new();
        query.push_paging(self.page, self.per_page);

        self.client
            .request(Method::GET, &self.endpoint, &query, NO_BODY)
            .await
    }
}

/// Lists a paginated collection, optionally filtered by name.
pub struct SearchBuilder<'a, T> {
    client: &'a RobinClient,
    endpoint: String,
    query: Option<String>,
    page: u32,
    per_page: u32,
    _item: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for SearchBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBuilder")
            .field("endpoint", &self.endpoint)
            .field("query", &self.query)
            .field("page", &self.page)
            .field("per_page", &self.per_page)
            .finish()
    }
}

impl<'a, T: DeserializeOwned> SearchBuilder<'a, T> {
    pub(crate) fn new(client: &'a RobinClient, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            query: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            _item: PhantomData,
        }
    }

    /// Only return results whose name matches.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
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

    pub async fn send(self) -> RobinResult<Vec<T>> {
        let mut query = QueryParams::new();
        query
            .push_opt("query", self.query.as_deref())
            .push_paging(self.page, self.per_page);

        self.client
            .request(Method::GET, &self.endpoint, &query, NO_BODY)
            .await
    }
}

/// Lists events overlapping a time window.
#[derive(Debug)]
pub struct EventListBuilder<'a> {
    client: &'a RobinClient,
    endpoint: String,
    after: Option<DateTime<FixedOffset>>,
    before: Option<DateTime<FixedOffset>>,
    page: u32,
    per_page: u32,
}

impl<'a> EventListBuilder<'a> {
    pub(crate) fn new(client: &'a RobinClient, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            after: None,
            before: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Lower bound for an event's end.
    pub fn after(mut self, after: DateTime<FixedOffset>) -> Self {
        self.after = Some(after);
        self
    }

    /// Upper bound for an event's start.
    pub fn before(mut self, before: DateTime<FixedOffset>) -> Self {
        self.before = Some(before);
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

    pub async fn send(self) -> RobinResult<Vec<Event>> {
        let mut query = QueryParams::new();
        query
            .push_datetime("after", self.after.as_ref())
            .push_datetime("before", self.before.as_ref())
            .push_paging(self.page, self.per_page);

        self.client
            .request(Method::GET, &self.endpoint, &query, NO_BODY)
            .await
    }
}

/// Lists devices, optionally restricted to one device manifest.
#[derive(Debug)]
pub struct DeviceListBuilder<'a> {
    client: &'a RobinClient,
    endpoint: String,
    manifest: Option<String>,
    page: u32,
    per_page: u32,
}

impl<'a> DeviceListBuilder<'a> {
    pub(crate) fn new(client: &'a RobinClient, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            manifest: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Only return devices of this manifest (id or slug).
    pub fn manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = Some(manifest.into());
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

    pub async fn send(self) -> RobinResult<Vec<Device>> {
        let mut query = QueryParams::new();
        query
            .push_opt("manifest", self.manifest.as_deref())
            .push_paging(self.page, self.per_page);

        self.client
            .request(Method::GET, &self.endpoint, &query, NO_BODY)
            .await
    }
}

/// Fetches a single resource, optionally with related records embedded.
pub struct IncludeBuilder<'a, T> {
    client: &'a RobinClient,
    endpoint: String,
    include: Vec<String>,
    _item: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for IncludeBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncludeBuilder")
            .field("endpoint", &self.endpoint)
            .field("include", &self.include)
            .finish()
    }
}

impl<'a, T: DeserializeOwned> IncludeBuilder<'a, T> {
    pub(crate) fn new(client: &'a RobinClient, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            include: Vec::new(),
            _item: PhantomData,
        }
    }

    /// Embeds a related record, e.g. `"calendar"` or `"location"`.
    pub fn include(mut self, relation: impl Into<String>) -> Self {
        self.include.push(relation.into());
        self
    }

    pub async fn send(self) -> RobinResult<T> {
        let mut query = QueryParams::new();
        query.push_list("include", &self.include);

        self.client
            .request(Method::GET, &self.endpoint, &query, NO_BODY)
            .await
    }
}
