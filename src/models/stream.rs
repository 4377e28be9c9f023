//! Live stream models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{StreamId, UserId};

/// An active broadcast, as returned by the `/streams` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    /// The stream's ID
    pub id: StreamId,
    /// ID of the broadcasting user
    pub user_id: UserId,
    /// Login name of the broadcasting user
    pub user_login: String,
    /// Display name of the broadcasting user
    pub user_name: String,
    /// ID of the category being streamed
    pub game_id: String,
    /// Name of the category being streamed
    pub game_name: String,
    /// Stream type: "live" or "" on error
    #[serde(rename = "type")]
    pub stream_type: String,
    /// The stream title
    pub title: String,
    /// Current viewer count
    pub viewer_count: u64,
    /// When the broadcast started
    pub started_at: DateTime<Utc>,
    /// The broadcast language (ISO 639-1)
    pub language: String,
    /// Thumbnail URL template with `{width}`/`{height}` placeholders
    pub thumbnail_url: String,
    /// Tag IDs applied to the stream
    #[serde(default)]
    pub tag_ids: Vec<String>,
    /// Whether the stream is flagged for mature audiences
    #[serde(default)]
    pub is_mature: bool,
}
