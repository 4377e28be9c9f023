//! Category (game) models.

use serde::{Deserialize, Serialize};

/// A stream category, as returned by the `/games` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// The category's ID
    pub id: String,
    /// The category's name
    pub name: String,
    /// Box art URL template with `{width}`/`{height}` placeholders
    pub box_art_url: String,
}
