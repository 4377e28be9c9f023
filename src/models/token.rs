//! OAuth token models.

use serde::Deserialize;

use super::AccessToken;

/// The credential response from the Twitch OAuth2 token endpoint.
///
/// Returned by every grant; the refresh token and scope list are absent
/// for the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEnvelope {
    /// The access token
    pub access_token: String,
    /// The refresh token, when the grant issues one
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token, in seconds
    pub expires_in: u64,
    /// The scopes granted to the token
    #[serde(default)]
    pub scope: Vec<String>,
    /// The token type, always "bearer"
    pub token_type: String,
}

impl TokenEnvelope {
    /// Wrap the access token for use with Helix operations.
    pub fn to_access_token(&self) -> AccessToken {
        AccessToken::new(self.access_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_envelope() {
        let json = r#"{
            "access_token": "rfx2uswqe8l4g1mkagrvg5tv0ks3",
            "refresh_token": "5b93chm6hdve3mycz05zfzatkfdenfspp1h1ar2xxdalen01",
            "expires_in": 14124,
            "scope": ["channel:moderate", "chat:edit"],
            "token_type": "bearer"
        }"#;

        let envelope: TokenEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.access_token, "rfx2uswqe8l4g1mkagrvg5tv0ks3");
        assert_eq!(envelope.scope.len(), 2);
        assert!(envelope.refresh_token.is_some());
        assert_eq!(envelope.to_access_token().secret(), envelope.access_token);
    }

    #[test]
    fn test_deserialize_app_token_envelope() {
        // Client-credentials responses omit refresh_token and scope.
        let json = r#"{
            "access_token": "jostpf5q0uzmxmkba9iyug38kjtg",
            "expires_in": 5011271,
            "token_type": "bearer"
        }"#;

        let envelope: TokenEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.refresh_token.is_none());
        assert!(envelope.scope.is_empty());
    }
}
