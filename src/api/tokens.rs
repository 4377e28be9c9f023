//! Token exchange service for the Twitch OAuth2 token endpoint.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::TokenEnvelope;
use crate::Result;

/// Service for OAuth2 token exchange.
///
/// Each operation is a single one-shot POST of form-encoded grant
/// parameters; the client ID and secret come from the configured
/// [`Credentials`](crate::Credentials). Failures surface the token
/// endpoint's error payload verbatim, never retried or reinterpreted.
/// When and whether to refresh is the caller's policy.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: twitch_helix_rs::HelixClient) -> twitch_helix_rs::Result<()> {
/// // Finish the authorization-code flow
/// let envelope = client.tokens()
///     .exchange_code("gulfwdmys5lsm6qyz4xiz9q32l10", "http://localhost:3000/callback")
///     .await?;
///
/// let token = envelope.to_access_token();
/// let me = client.users().me(&token).await?;
/// # Ok(())
/// # }
/// ```
pub struct TokensService {
    inner: Arc<ClientInner>,
}

impl TokensService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Exchange an authorization code for a user token.
    ///
    /// `redirect_uri` must match the URI the code was issued against.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenEnvelope> {
        let form = [
            ("client_id", self.inner.credentials.client_id().to_string()),
            ("client_secret", self.inner.credentials.client_secret().to_string()),
            ("code", code.to_string()),
            ("grant_type", "authorization_code".to_string()),
            ("redirect_uri", redirect_uri.to_string()),
        ];
        self.inner.post_token_form(&form).await
    }

    /// Exchange a refresh token for a fresh user token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenEnvelope> {
        let form = [
            ("grant_type", "refresh_token".to_string()),
            ("refresh_token", refresh_token.to_string()),
            ("client_id", self.inner.credentials.client_id().to_string()),
            ("client_secret", self.inner.credentials.client_secret().to_string()),
        ];
        self.inner.post_token_form(&form).await
    }

    /// Obtain an app access token via the client-credentials grant.
    ///
    /// The `scope` parameter is omitted when `scopes` is empty.
    pub async fn client_credentials(&self, scopes: &[&str]) -> Result<TokenEnvelope> {
        let mut form = vec![
            ("client_id", self.inner.credentials.client_id().to_string()),
            ("client_secret", self.inner.credentials.client_secret().to_string()),
            ("grant_type", "client_credentials".to_string()),
        ];
        if !scopes.is_empty() {
            form.push(("scope", scopes.join(" ")));
        }
        self.inner.post_token_form(&form).await
    }
}
