//! Channel models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// A channel editor, as returned by the `/channels/editors` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Editor {
    /// ID of the editor
    pub user_id: UserId,
    /// Display name of the editor
    pub user_name: String,
    /// When the user was granted editor status
    pub created_at: DateTime<Utc>,
}
