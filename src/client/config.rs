//! Client configuration and application credentials.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable holding the application client ID.
pub const CLIENT_ID_VAR: &str = "TWITCH_CLIENT_ID";
/// Environment variable holding the application client secret.
pub const CLIENT_SECRET_VAR: &str = "TWITCH_CLIENT_SECRET";

/// Twitch application credentials.
///
/// The client ID is sent with every Helix request; both values are sent
/// during token exchange. Credentials are loaded once at client
/// construction and never mutated.
///
/// # Example
///
/// ```no_run
/// use twitch_helix_rs::Credentials;
///
/// # fn example() -> twitch_helix_rs::Result<()> {
/// // From explicit values
/// let credentials = Credentials::new("my-client-id", "my-client-secret");
///
/// // Or from TWITCH_CLIENT_ID / TWITCH_CLIENT_SECRET
/// let credentials = Credentials::from_env()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Load credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Fails fast with [`Error::Config`] if either variable is missing,
    /// rather than letting a later request go out malformed.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(CLIENT_ID_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", CLIENT_ID_VAR)))?;
        let client_secret = std::env::var(CLIENT_SECRET_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", CLIENT_SECRET_VAR)))?;
        Ok(Self::new(client_id, client_secret))
    }

    /// Get the application client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Expose the client secret for token exchange requests.
    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the Helix client.
///
/// # Example
///
/// ```
/// use twitch_helix_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for Helix resource requests
    pub api_base_url: String,
    /// Base URL for the OAuth2 token endpoint
    pub auth_base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.twitch.tv/helix".to_string(),
            auth_base_url: "https://id.twitch.tv/oauth2".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("twitch-helix-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the Helix base URL. Useful for testing against a local server.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the OAuth2 base URL. Useful for testing against a local server.
    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "https://api.twitch.tv/helix");
        assert_eq!(config.auth_base_url, "https://id.twitch.tv/oauth2");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_api_base_url("http://127.0.0.1:8080")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("abc123", "hunter2");
        let debug_str = format!("{:?}", credentials);
        assert!(debug_str.contains("abc123"));
        assert!(!debug_str.contains("hunter2"));
    }
}
