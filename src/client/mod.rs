//! HTTP client and service layer for the Twitch Helix API.
//!
//! This module provides the main entry point [`HelixClient`] for
//! interacting with the Helix API.
//!
//! # Example
//!
//! ```no_run
//! use twitch_helix_rs::{AccessToken, Credentials, HelixClient};
//!
//! # async fn example() -> twitch_helix_rs::Result<()> {
//! let client = HelixClient::new(Credentials::from_env()?)?;
//! let token = AccessToken::new("user-access-token");
//!
//! // Get the authenticated user
//! let me = client.users().me(&token).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paging;

pub use config::{ClientConfig, Credentials, CLIENT_ID_VAR, CLIENT_SECRET_VAR};
pub use http::HelixClient;
pub use paging::{TotalBehavior, MAX_IDS_PER_REQUEST, PAGE_SIZE};
pub(crate) use http::ClientInner;
