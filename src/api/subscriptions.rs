//! Subscriptions service for channel subscription queries.

use std::sync::Arc;

use crate::client::paging::TotalBehavior;
use crate::client::ClientInner;
use crate::models::{AccessToken, Subscription, UserId};
use crate::Result;

/// Service for channel subscription operations.
///
/// # Example
///
/// ```no_run
/// use twitch_helix_rs::{AccessToken, UserId};
///
/// # async fn example(client: twitch_helix_rs::HelixClient) -> twitch_helix_rs::Result<()> {
/// let token = AccessToken::new("user-access-token");
///
/// let subs = client.subscriptions().list(&UserId::new("44322889"), &token).await?;
/// println!("{} subscribers", subs.len());
/// # Ok(())
/// # }
/// ```
pub struct SubscriptionsService {
    inner: Arc<ClientInner>,
}

impl SubscriptionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all subscribers of a channel, across all pages.
    ///
    /// Requires the `channel:read:subscriptions` scope on the token. The
    /// subscriptions endpoint reports a `total` count; a zero total ends
    /// the fetch immediately, otherwise the cursor chain is walked to
    /// exhaustion.
    pub async fn list(
        &self,
        broadcaster_id: &UserId,
        token: &AccessToken,
    ) -> Result<Vec<Subscription>> {
        let params = [("broadcaster_id", broadcaster_id.to_string())];
        self.inner
            .get_all_pages("/subscriptions", &params, token, TotalBehavior::StopOnZero)
            .await
    }
}
