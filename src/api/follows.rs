//! Follows service for follow relationship queries.

use std::sync::Arc;

use crate::client::paging::TotalBehavior;
use crate::client::ClientInner;
use crate::models::{AccessToken, Follow, UserId};
use crate::{Error, Result};

/// Service for follow relationship operations.
///
/// # Example
///
/// ```no_run
/// use twitch_helix_rs::api::FollowsQuery;
/// use twitch_helix_rs::{AccessToken, UserId};
///
/// # async fn example(client: twitch_helix_rs::HelixClient) -> twitch_helix_rs::Result<()> {
/// let token = AccessToken::new("user-access-token");
///
/// // Everyone a user follows
/// let query = FollowsQuery::default().from(UserId::new("141981764"));
/// let follows = client.follows().list(&query, &token).await?;
/// println!("follows {} channels", follows.len());
/// # Ok(())
/// # }
/// ```
pub struct FollowsService {
    inner: Arc<ClientInner>,
}

/// Filter parameters for listing follow relationships.
///
/// At least one of the two filters must be set; setting both restricts the
/// result to the single relationship between the two users.
#[derive(Debug, Default, Clone)]
pub struct FollowsQuery {
    /// Only relationships towards this channel (its followers)
    pub to_id: Option<UserId>,
    /// Only relationships from this user (who they follow)
    pub from_id: Option<UserId>,
}

impl FollowsQuery {
    /// Filter to followers of a channel.
    pub fn to(mut self, channel_id: UserId) -> Self {
        self.to_id = Some(channel_id);
        self
    }

    /// Filter to channels a user follows.
    pub fn from(mut self, user_id: UserId) -> Self {
        self.from_id = Some(user_id);
        self
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(ref to_id) = self.to_id {
            params.push(("to_id", to_id.to_string()));
        }
        if let Some(ref from_id) = self.from_id {
            params.push(("from_id", from_id.to_string()));
        }
        params
    }
}

impl FollowsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all follow relationships matching the query, across all pages.
    ///
    /// The follows endpoint reports a `total` count; a zero total ends the
    /// fetch immediately, otherwise the cursor chain is walked to
    /// exhaustion.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidInput`] when neither filter is set,
    /// before any request is issued.
    pub async fn list(&self, query: &FollowsQuery, token: &AccessToken) -> Result<Vec<Follow>> {
        let params = query.to_params();
        if params.is_empty() {
            return Err(Error::InvalidInput(
                "follows query requires to_id or from_id".to_string(),
            ));
        }

        self.inner
            .get_all_pages("/users/follows", &params, token, TotalBehavior::StopOnZero)
            .await
    }

    /// List all followers of a channel.
    pub async fn followers_of(
        &self,
        channel_id: &UserId,
        token: &AccessToken,
    ) -> Result<Vec<Follow>> {
        self.list(&FollowsQuery::default().to(channel_id.clone()), token)
            .await
    }

    /// List all channels a user follows.
    pub async fn followed_by(
        &self,
        user_id: &UserId,
        token: &AccessToken,
    ) -> Result<Vec<Follow>> {
        self.list(&FollowsQuery::default().from(user_id.clone()), token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_order() {
        let query = FollowsQuery::default()
            .to(UserId::new("1"))
            .from(UserId::new("2"));
        let params = query.to_params();
        assert_eq!(params[0], ("to_id", "1".to_string()));
        assert_eq!(params[1], ("from_id", "2".to_string()));
    }

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(FollowsQuery::default().to_params().is_empty());
    }
}
