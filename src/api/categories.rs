//! Categories service for category (game) lookups.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{AccessToken, Category};
use crate::Result;

/// Service for category lookups.
pub struct CategoriesService {
    inner: Arc<ClientInner>,
}

impl CategoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Look up a category by its exact name.
    ///
    /// Returns `None` when no category matches; that is a valid outcome,
    /// not a failure.
    pub async fn by_name(&self, name: &str, token: &AccessToken) -> Result<Option<Category>> {
        let params = [("name", name.to_string())];
        self.inner.get_first("/games", &params, token).await
    }
}
