use chrono::{DateTime, FixedOffset};
use http::Method;

use super::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::client::NO_BODY;
use crate::models::FreeBusy;
use crate::{QueryParams, RobinClient, RobinResult};

/// Length in minutes of the free window searched for when none is given.
pub const DEFAULT_DURATION: u32 = 30;

/// Provides availability search across spaces.
#[derive(Debug)]
pub struct FreeBusyHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> FreeBusyHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    /// Finds spaces with a free window in a time range.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &robin_client::RobinClient) -> robin_client::RobinResult<()> {
    /// use chrono::{Duration, Local};
    ///
    /// let now = Local::now().fixed_offset();
    /// let rooms = client
    ///     .free_busy()
    ///     .spaces()
    ///     .location_ids([12, 13])
    ///     .after(now)
    ///     .before(now + Duration::hours(2))
    ///     .duration(60)
    ///     .min_capacity(6)
    ///     .send()
    ///     .await?;
    ///
    /// for room in rooms.iter().filter(|r| r.is_free()) {
    ///     if let Some(space) = &room.space {
    ///         println!("{space} is free");
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn spaces(&self) -> FreeBusySpacesBuilder<'a> {
        FreeBusySpacesBuilder::new(self.client)
    }
}

/// Search filters for [`FreeBusyHandler::spaces`].
#[derive(Debug)]
pub struct FreeBusySpacesBuilder<'a> {
    client: &'a RobinClient,
    location_ids: Vec<i64>,
    space_ids: Vec<i64>,
    after: Option<DateTime<FixedOffset>>,
    before: Option<DateTime<FixedOffset>>,
    duration: u32,
    types: Vec<String>,
    amenity_ids: Vec<i64>,
    query: Option<String>,
    min_capacity: Option<u32>,
    max_capacity: Option<u32>,
    page: u32,
    per_page: u32,
}

impl<'a> FreeBusySpacesBuilder<'a> {
    fn new(client: &'a RobinClient) -> Self {
        Self {
            client,
            location_ids: Vec::new(),
            space_ids: Vec::new(),
            after: None,
            before: None,
            duration: DEFAULT_DURATION,
            types: Vec::new(),
            amenity_ids: Vec::new(),
            query: None,
            min_capacity: None,
            max_capacity: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn location_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.location_ids.extend(ids);
        self
    }

    pub fn space_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.space_ids.extend(ids);
        self
    }

    /// Start of the searched range.
    pub fn after(mut self, after: DateTime<FixedOffset>) -> Self {
        self.after = Some(after);
        self
    }

    /// End of the searched range.
    pub fn before(mut self, before: DateTime<FixedOffset>) -> Self {
        self.before = Some(before);
        self
    }

    /// Minutes of contiguous free time a space needs to match.
    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    /// Space kinds to include, e.g. `"meeting"`.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Only match spaces that have all of these amenities.
    pub fn amenity_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.amenity_ids.extend(ids);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn min_capacity(mut self, capacity: u32) -> Self {
        self.min_capacity = Some(capacity);
        self
    }

    pub fn max_capacity(mut self, capacity: u32) -> Self {
        self.max_capacity = Some(capacity);
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

    fn params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_list("location_ids", &self.location_ids)
            .push_list("space_ids", &self.space_ids)
            .push_datetime("after", self.after.as_ref())
            .push_datetime("before", self.before.as_ref())
            .push("duration", self.duration)
            .push_list("types", &self.types)
            .push_list("amenity_ids", &self.amenity_ids)
            .push_opt("query", self.query.as_deref())
            .push_opt("min_capacity", self.min_capacity)
            .push_opt("max_capacity", self.max_capacity)
            .push_paging(self.page, self.per_page);
        query
    }

    pub async fn send(self) -> RobinResult<Vec<FreeBusy>> {
        let query = self.params();
        self.client
            .request(Method::GET, "free-busy/spaces", &query, NO_BODY)
            .await
    }
}
