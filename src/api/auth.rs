use http::Method;

use crate::client::NO_BODY;
use crate::models::AccessToken;
use crate::{QueryParams, RobinClient, RobinResult};

/// Provides information about the credentials the client uses.
#[derive(Debug)]
pub struct AuthHandler<'a> {
    client: &'a RobinClient,
}

impl<'a> AuthHandler<'a> {
    pub(crate) fn new(client: &'a RobinClient) -> Self {
        Self { client }
    }

    /// Retrieves details about the current access token: its scopes, expiry
    /// and when it was last used.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &robin_client::RobinClient) -> robin_client::RobinResult<()> {
    /// let token = client.auth().access_token().await?;
    /// if token.expire_at.is_some() {
    ///     println!("token {} expires", token.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn access_token(&self) -> RobinResult<AccessToken> {
        self.client
            .request(Method::GET, "auth", &QueryParams::new(), NO_BODY)
            .await
    }
}
