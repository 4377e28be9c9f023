//! API service modules for Twitch endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the Helix API, plus the OAuth2 token endpoint.

mod categories;
mod channels;
mod follows;
mod streams;
mod subscriptions;
mod tokens;
mod users;

pub use categories::CategoriesService;
pub use channels::ChannelsService;
pub use follows::{FollowsQuery, FollowsService};
pub use streams::StreamsService;
pub use subscriptions::SubscriptionsService;
pub use tokens::TokensService;
pub use users::UsersService;
