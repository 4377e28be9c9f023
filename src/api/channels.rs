//! Channels service for editor lookup and channel updates.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{AccessToken, Editor, UserId};
use crate::{Error, Result};

/// Service for channel-related operations.
///
/// # Example
///
/// ```no_run
/// use twitch_helix_rs::{AccessToken, UserId};
///
/// # async fn example(client: twitch_helix_rs::HelixClient) -> twitch_helix_rs::Result<()> {
/// let token = AccessToken::new("user-access-token");
/// let broadcaster = UserId::new("44322889");
///
/// client.channels().set_title(&broadcaster, "Speedrun practice", &token).await?;
/// client.channels().set_category_by_name(&broadcaster, "Celeste", &token).await?;
/// # Ok(())
/// # }
/// ```
pub struct ChannelsService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct TitleUpdate<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct CategoryUpdate<'a> {
    game_id: &'a str,
}

impl ChannelsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the editors of a channel.
    ///
    /// Requires the `channel:read:editors` scope on the token.
    pub async fn editors(
        &self,
        broadcaster_id: &UserId,
        token: &AccessToken,
    ) -> Result<Vec<Editor>> {
        let params = [("broadcaster_id", broadcaster_id.to_string())];
        self.inner.get_list("/channels/editors", &params, token).await
    }

    /// Update the channel title.
    ///
    /// One PATCH; Helix responds with no body on success.
    pub async fn set_title(
        &self,
        broadcaster_id: &UserId,
        title: &str,
        token: &AccessToken,
    ) -> Result<()> {
        let params = [("broadcaster_id", broadcaster_id.to_string())];
        self.inner
            .patch("/channels", &params, &TitleUpdate { title }, token)
            .await
    }

    /// Update the channel category by exact category name.
    ///
    /// Resolves the name to a category ID first, then PATCHes the channel.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CategoryNotFound`] when no category matches the
    /// name; the PATCH is not issued in that case. The variant is distinct
    /// from transport failures so a caller can render a user-facing
    /// message.
    pub async fn set_category_by_name(
        &self,
        broadcaster_id: &UserId,
        name: &str,
        token: &AccessToken,
    ) -> Result<()> {
        let lookup = [("name", name.to_string())];
        let category: Option<crate::models::Category> =
            self.inner.get_first("/games", &lookup, token).await?;

        let category = category.ok_or_else(|| Error::CategoryNotFound {
            name: name.to_string(),
        })?;

        let params = [("broadcaster_id", broadcaster_id.to_string())];
        self.inner
            .patch(
                "/channels",
                &params,
                &CategoryUpdate {
                    game_id: &category.id,
                },
                token,
            )
            .await
    }
}
