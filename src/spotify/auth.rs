use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::SpotifyConfig,
    error::ApiError,
    spotify::{AuthClient, http_client},
    types::{Credentials, TokenResponse},
};

/// Client-credentials token issuance over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    client: Client,
    token_url: String,
}

impl HttpAuthClient {
    pub fn new(client: Client, token_url: impl Into<String>) -> Self {
        HttpAuthClient {
            client,
            token_url: token_url.into(),
        }
    }

    pub fn from_config(config: &SpotifyConfig) -> Result<Self, ApiError> {
        Ok(Self::new(http_client(config.timeout)?, config.token_url.clone()))
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    /// Exchanges client credentials for an access token.
    ///
    /// Sends a form-encoded POST with `grant_type`, `client_id` and `client_secret`
    /// to the configured token URL.
    ///
    /// # Error Conditions
    ///
    /// Every failure is reported as [`ApiError::Authentication`]:
    /// - Credentials violating the grant constraints (no request is sent)
    /// - Network connectivity issues
    /// - Non-2xx responses such as invalid credentials or rate limiting
    /// - Malformed response bodies or an empty access token
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        credentials.validate().map_err(ApiError::Authentication)?;

        let response = self
            .client
            .post(&self.token_url)
            .form(&credentials.as_form())
            .send()
            .await
            .map_err(|e| ApiError::Authentication(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| ApiError::Authentication(e.to_string()))?;

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Authentication(format!("malformed token response: {}", e)))?;

        if token.access_token.trim().is_empty() {
            return Err(ApiError::Authentication(
                "token endpoint returned an empty access token".to_string(),
            ));
        }

        Ok(token)
    }
}
