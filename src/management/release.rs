use std::sync::Arc;

use crate::{
    config::SpotifyConfig,
    error::ApiError,
    spotify::{AuthClient, CatalogClient, HttpAuthClient, HttpCatalogClient, bearer},
    types::{Album, Credentials},
};

/// Sequences token acquisition and the new-releases fetch for one request.
///
/// The manager holds no per-request state: a fresh token is requested for
/// every call to [`NewReleaseManager::fetch_albums`] and dropped once the
/// albums are returned. It is therefore safe to share behind an `Arc` across
/// concurrent requests.
pub struct NewReleaseManager {
    credentials: Credentials,
    auth: Arc<dyn AuthClient>,
    catalog: Arc<dyn CatalogClient>,
}

impl NewReleaseManager {
    pub fn new(
        credentials: Credentials,
        auth: Arc<dyn AuthClient>,
        catalog: Arc<dyn CatalogClient>,
    ) -> Self {
        NewReleaseManager {
            credentials,
            auth,
            catalog,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Wires the HTTP clients for the real Spotify endpoints.
    pub fn from_config(config: &SpotifyConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            config.credentials.clone(),
            Arc::new(HttpAuthClient::from_config(config)?),
            Arc::new(HttpCatalogClient::from_config(config)?),
        ))
    }

    /// Returns the albums on the first page of new releases, in provider order.
    ///
    /// # Stages
    ///
    /// 1. `AwaitingToken`: request a client-credentials token. A failure aborts
    ///    the request and the catalog is never contacted.
    /// 2. `AwaitingCatalog`: fetch new releases with `Bearer <token>`.
    /// 3. `Done`: hand back the album items unchanged. An empty page is a
    ///    success, not an error.
    pub async fn fetch_albums(&self) -> Result<Vec<Album>, ApiError> {
        let token = self.auth.request_token(&self.credentials).await?;
        if token.access_token.trim().is_empty() {
            return Err(ApiError::Authentication(
                "received an empty access token".to_string(),
            ));
        }

        let page = self.catalog.new_releases(&bearer(&token.access_token)).await?;
        Ok(page.albums.items)
    }
}
