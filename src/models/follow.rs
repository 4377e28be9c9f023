//! Follow relationship models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// A follow relationship, as returned by the `/users/follows` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    /// ID of the following user
    pub from_id: UserId,
    /// Login name of the following user
    pub from_login: String,
    /// Display name of the following user
    pub from_name: String,
    /// ID of the followed channel
    pub to_id: UserId,
    /// Login name of the followed channel
    pub to_login: String,
    /// Display name of the followed channel
    pub to_name: String,
    /// When the follow was created
    pub followed_at: DateTime<Utc>,
}
