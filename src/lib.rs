//! # twitch-helix-rs
//!
//! A typed Rust client for the Twitch Helix REST API and OAuth2 token
//! endpoint.
//!
//! The crate wraps Helix's paged, cursor-driven endpoints behind typed
//! operations that return complete, in-memory collections: cursor
//! pagination and per-request ID limits are handled internally, with
//! deterministic completion conditions and all-or-nothing error
//! propagation.
//!
//! ## Features
//!
//! - **Token Exchange**: authorization-code, refresh-token, and
//!   client-credentials grants
//! - **Cursor Pagination**: follows and subscriptions materialized across
//!   all pages
//! - **ID Batching**: bulk user and stream lookups chunked at 100 ids per
//!   request, input order preserved
//! - **Channel Updates**: title and category updates, with a distinct
//!   domain error when a category name resolves to nothing
//! - **Type Safety**: strongly-typed models and ID newtypes
//! - **Async-first**: sequential awaits per operation; no hidden
//!   concurrency, no shared mutable state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use twitch_helix_rs::{AccessToken, Credentials, HelixClient, UserId};
//!
//! #[tokio::main]
//! async fn main() -> twitch_helix_rs::Result<()> {
//!     // Credentials from TWITCH_CLIENT_ID / TWITCH_CLIENT_SECRET
//!     let client = HelixClient::new(Credentials::from_env()?)?;
//!
//!     // The caller owns token acquisition and renewal policy
//!     let envelope = client.tokens().refresh("stored-refresh-token").await?;
//!     let token = envelope.to_access_token();
//!
//!     // Single resource: None means "not live", not an error
//!     let broadcaster = UserId::new("44322889");
//!     if let Some(stream) = client.streams().by_user_id(&broadcaster, &token).await? {
//!         println!("live: {} ({} viewers)", stream.title, stream.viewer_count);
//!     }
//!
//!     // Full materialization across every page
//!     let followers = client.follows().followers_of(&broadcaster, &token).await?;
//!     println!("{} followers", followers.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses surface as [`Error::Api`] carrying the status code
//! and the remote's raw JSON error payload, so callers can match on the
//! upstream shape. Nothing is retried; partial results are never returned.
//! Empty result sets are `Ok` values ([`Option::None`] or an empty `Vec`),
//! never errors.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, Credentials, HelixClient};
pub use error::{Error, Result};
pub use models::{AccessToken, StreamId, UserId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use twitch_helix_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::FollowsQuery;
    pub use crate::client::{ClientConfig, Credentials, HelixClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AccessToken, Category, Editor, Follow, Stream, StreamId, Subscription, TokenEnvelope,
        User, UserId,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_creation() {
        let id = UserId::new("44322889");
        assert_eq!(id.as_str(), "44322889");
    }

    #[test]
    fn test_default_base_urls() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "https://api.twitch.tv/helix");
        assert_eq!(config.auth_base_url, "https://id.twitch.tv/oauth2");
    }

    #[test]
    fn test_client_is_cloneable() {
        let client = HelixClient::new(Credentials::new("id", "secret")).unwrap();
        let clone = client.clone();
        assert_eq!(clone.credentials().client_id(), "id");
    }
}
