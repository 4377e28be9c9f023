//! Streams service for live broadcast lookups.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{AccessToken, Stream, StreamId, UserId};
use crate::Result;

/// Service for live stream operations.
///
/// # Example
///
/// ```no_run
/// use twitch_helix_rs::{AccessToken, UserId};
///
/// # async fn example(client: twitch_helix_rs::HelixClient) -> twitch_helix_rs::Result<()> {
/// let token = AccessToken::new("user-access-token");
///
/// match client.streams().by_user_id(&UserId::new("44322889"), &token).await? {
///     Some(stream) => println!("{} is live: {}", stream.user_name, stream.title),
///     None => println!("offline"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct StreamsService {
    inner: Arc<ClientInner>,
}

impl StreamsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the active stream for a user, if any.
    ///
    /// Returns `None` when the user is not live; that is a valid outcome,
    /// not a failure.
    pub async fn by_user_id(
        &self,
        user_id: &UserId,
        token: &AccessToken,
    ) -> Result<Option<Stream>> {
        let params = [("user_id", user_id.to_string())];
        self.inner.get_first("/streams", &params, token).await
    }

    /// Look up streams by stream ID in bulk.
    ///
    /// Issues one request per 100 ids, sequentially, preserving input
    /// order across chunks. An empty id list returns an empty collection
    /// without touching the network.
    pub async fn by_ids(&self, ids: &[StreamId], token: &AccessToken) -> Result<Vec<Stream>> {
        self.inner.get_by_ids("/streams", ids, token).await
    }
}
