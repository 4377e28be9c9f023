//! Subscription models.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A channel subscription, as returned by the `/subscriptions` endpoint.
///
/// Gifter fields are empty strings when the subscription was not gifted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// ID of the broadcaster
    pub broadcaster_id: UserId,
    /// Login name of the broadcaster
    pub broadcaster_login: String,
    /// Display name of the broadcaster
    pub broadcaster_name: String,
    /// ID of the gifting user, if gifted
    #[serde(default)]
    pub gifter_id: String,
    /// Login name of the gifting user, if gifted
    #[serde(default)]
    pub gifter_login: String,
    /// Display name of the gifting user, if gifted
    #[serde(default)]
    pub gifter_name: String,
    /// Whether the subscription was gifted
    #[serde(default)]
    pub is_gift: bool,
    /// Subscription tier: "1000", "2000", or "3000"
    pub tier: String,
    /// Name of the subscription plan
    #[serde(default)]
    pub plan_name: String,
    /// ID of the subscribed user
    pub user_id: UserId,
    /// Display name of the subscribed user
    pub user_name: String,
    /// Login name of the subscribed user
    pub user_login: String,
}
