use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use crate::{
    config::SpotifyConfig,
    error::ApiError,
    spotify::{CatalogClient, bearer_token, http_client},
    types::NewReleasesResponse,
};

/// Reads Spotify's new-releases browse endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    api_url: String,
}

impl HttpCatalogClient {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        HttpCatalogClient {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &SpotifyConfig) -> Result<Self, ApiError> {
        Ok(Self::new(http_client(config.timeout)?, config.api_url.clone()))
    }

    pub fn new_releases_url(&self) -> String {
        format!(
            "{uri}/browse/new-releases",
            uri = self.api_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    /// Retrieves the first page of new album releases.
    ///
    /// Only the first page is fetched; the pagination metadata in the response
    /// is returned as-is and never followed.
    ///
    /// # Error Conditions
    ///
    /// Every failure is reported as [`ApiError::CatalogFetch`]:
    /// - An authorization value that is not `Bearer <token>` (no request is sent)
    /// - Network connectivity issues
    /// - 401 for an expired or invalid token, or any other non-2xx status
    /// - Malformed response bodies
    async fn new_releases(&self, authorization: &str) -> Result<NewReleasesResponse, ApiError> {
        if bearer_token(authorization).is_none() {
            return Err(ApiError::CatalogFetch(
                "authorization must be a non-empty bearer token".to_string(),
            ));
        }

        let response = self
            .client
            .get(self.new_releases_url())
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| ApiError::CatalogFetch(e.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::CatalogFetch(
                "access token was rejected (401 Unauthorized)".to_string(),
            ));
        }

        let response = response
            .error_for_status()
            .map_err(|e| ApiError::CatalogFetch(e.to_string()))?;

        response
            .json::<NewReleasesResponse>()
            .await
            .map_err(|e| ApiError::CatalogFetch(format!("malformed new releases response: {}", e)))
    }
}
