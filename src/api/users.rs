//! Users service for user lookup operations.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{AccessToken, User, UserId};
use crate::Result;

/// Service for user-related operations.
///
/// # Example
///
/// ```no_run
/// use twitch_helix_rs::{AccessToken, UserId};
///
/// # async fn example(client: twitch_helix_rs::HelixClient) -> twitch_helix_rs::Result<()> {
/// let token = AccessToken::new("user-access-token");
///
/// // Who does this token belong to?
/// if let Some(me) = client.users().me(&token).await? {
///     println!("Hello, {}!", me.display_name);
/// }
///
/// // Bulk lookup by ID; any number of ids, chunked automatically
/// let ids = vec![UserId::new("141981764"), UserId::new("44322889")];
/// let users = client.users().by_ids(&ids, &token).await?;
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the user the access token was issued to.
    ///
    /// Returns `None` if the response carries no user, which callers must
    /// treat as a valid outcome distinct from a request failure.
    pub async fn me(&self, token: &AccessToken) -> Result<Option<User>> {
        self.inner.get_first("/users", &[], token).await
    }

    /// Look up users by ID in bulk.
    ///
    /// Issues one request per 100 ids, sequentially, preserving input
    /// order across chunks. An empty id list returns an empty collection
    /// without touching the network.
    pub async fn by_ids(&self, ids: &[UserId], token: &AccessToken) -> Result<Vec<User>> {
        self.inner.get_by_ids("/users", ids, token).await
    }
}
