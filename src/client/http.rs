//! HTTP client implementation for the Twitch Helix API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::api::{
    CategoriesService, ChannelsService, FollowsService, StreamsService, SubscriptionsService,
    TokensService, UsersService,
};
use crate::models::AccessToken;
use crate::{Error, Result};

use super::config::{ClientConfig, Credentials};

/// The main client for interacting with the Twitch Helix API.
///
/// This client provides access to all API services through method calls
/// that return service structs. The client holds the application
/// credentials and shared HTTP configuration; access tokens are supplied
/// by the caller on each operation.
///
/// The client is cheap to clone and safe to share: beyond the immutable
/// credentials and configuration it holds no state.
///
/// # Example
///
/// ```no_run
/// use twitch_helix_rs::{AccessToken, Credentials, HelixClient, UserId};
///
/// # async fn example() -> twitch_helix_rs::Result<()> {
/// let client = HelixClient::new(Credentials::from_env()?)?;
/// let token = AccessToken::new("user-access-token");
///
/// // Fetch every follower of a channel, across all pages
/// let follows = client.follows().followers_of(&UserId::new("44322889"), &token).await?;
/// println!("{} followers", follows.len());
/// # Ok(())
/// # }
/// ```
pub struct HelixClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
}

impl HelixClient {
    /// Create a new client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                config,
            }),
        })
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the streams service.
    pub fn streams(&self) -> StreamsService {
        StreamsService::new(self.inner.clone())
    }

    /// Get the channels service.
    pub fn channels(&self) -> ChannelsService {
        ChannelsService::new(self.inner.clone())
    }

    /// Get the follows service.
    pub fn follows(&self) -> FollowsService {
        FollowsService::new(self.inner.clone())
    }

    /// Get the subscriptions service.
    pub fn subscriptions(&self) -> SubscriptionsService {
        SubscriptionsService::new(self.inner.clone())
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the token exchange service.
    pub fn tokens(&self) -> TokensService {
        TokensService::new(self.inner.clone())
    }

    /// Get the configured application credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }
}

impl ClientInner {
    /// Build Helix request headers: client ID plus bearer authorization.
    pub(crate) fn build_headers(&self, token: &AccessToken) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "Client-Id",
            HeaderValue::from_str(self.credentials.client_id())
                .map_err(|_| Error::InvalidInput("Invalid client ID format".to_string()))?,
        );

        let bearer = format!("Bearer {}", token.secret());
        let mut auth_value = HeaderValue::from_str(&bearer)
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Make a GET request against the Helix API with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &AccessToken,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.api_base_url, path);
        let headers = self.build_headers(token)?;

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch a list endpoint and return only its first element.
    ///
    /// An empty `data` array is a valid outcome, not a failure.
    pub(crate) async fn get_first<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &AccessToken,
    ) -> Result<Option<T>> {
        let response: DataResponse<T> = self.get_with_query(path, query, token).await?;
        Ok(response.data.into_iter().next())
    }

    /// Fetch a flat, non-paginated list endpoint.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &AccessToken,
    ) -> Result<Vec<T>> {
        let response: DataResponse<T> = self.get_with_query(path, query, token).await?;
        Ok(response.data)
    }

    /// Make a PATCH request against the Helix API.
    ///
    /// Helix mutations respond with no body on success, so only the status
    /// is checked.
    pub(crate) async fn patch<B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
        token: &AccessToken,
    ) -> Result<()> {
        let url = format!("{}{}", self.config.api_base_url, path);
        let headers = self.build_headers(token)?;

        let response = self
            .http
            .patch(&url)
            .headers(headers)
            .query(query)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        Err(Error::from_api_response(status.as_u16(), body))
    }

    /// Make a form-encoded POST to the OAuth2 token endpoint.
    ///
    /// Token exchange carries no Helix headers; the grant parameters
    /// identify the application.
    pub(crate) async fn post_token_form<T: DeserializeOwned>(
        &self,
        form: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/token", self.config.auth_base_url);

        let response = self.http.post(&url).form(form).send().await?;

        self.handle_response(response).await
    }

    /// Decode a successful response, or surface the raw error payload.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            Err(Error::from_api_response(status.as_u16(), body))
        }
    }
}

/// Response envelope for non-paginated list endpoints.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct DataResponse<T> {
    pub data: Vec<T>,
}

impl Clone for HelixClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for HelixClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelixClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
