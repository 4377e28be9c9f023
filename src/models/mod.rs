//! Data models for the Twitch Helix API.
//!
//! This module contains all the strongly-typed data structures used to
//! interact with the Helix API. Models are organized by domain:
//!
//! - [`primitives`] - Core types like `UserId`, `StreamId`, `AccessToken`
//! - [`user`] - User models
//! - [`stream`] - Live stream models
//! - [`channel`] - Channel editor models
//! - [`follow`] - Follow relationship models
//! - [`subscription`] - Subscription models
//! - [`category`] - Category (game) models
//! - [`token`] - OAuth token envelope

pub mod primitives;
pub mod user;
pub mod stream;
pub mod channel;
pub mod follow;
pub mod subscription;
pub mod category;
pub mod token;

// Re-export commonly used types
pub use primitives::*;
pub use user::*;
pub use stream::*;
pub use channel::*;
pub use follow::*;
pub use subscription::*;
pub use category::*;
pub use token::*;
