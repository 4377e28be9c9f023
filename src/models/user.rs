//! User models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// A Twitch user, as returned by the `/users` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user's ID
    pub id: UserId,
    /// The user's login name (lowercase)
    pub login: String,
    /// The user's display name
    pub display_name: String,
    /// User type: "staff", "admin", "global_mod", or ""
    #[serde(rename = "type")]
    pub user_type: String,
    /// Broadcaster type: "partner", "affiliate", or ""
    pub broadcaster_type: String,
    /// The user's channel description
    pub description: String,
    /// URL of the user's profile image
    pub profile_image_url: String,
    /// URL of the user's offline channel image
    pub offline_image_url: String,
    /// Total channel view count
    #[serde(default)]
    pub view_count: u64,
    /// The user's email address; only present with the `user:read:email` scope
    #[serde(default)]
    pub email: Option<String>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}
