//! # Spotify Integration Module
//!
//! The two remote contracts the service depends on, each expressed as a trait
//! with one method per HTTP operation, together with the reqwest adapters that
//! implement them against the real Spotify endpoints.
//!
//! ```text
//! NewReleaseManager
//!     ├── AuthClient     POST <token-url>                  (client credentials)
//!     └── CatalogClient  GET  <api-url>/browse/new-releases (bearer token)
//! ```
//!
//! Neither adapter retries, caches tokens or follows pagination. Every failure
//! surfaces as an [`ApiError`] of the matching category.

use async_trait::async_trait;

use crate::{
    error::ApiError,
    types::{Credentials, NewReleasesResponse, TokenResponse},
};

pub mod auth;
pub mod releases;

pub use auth::HttpAuthClient;
pub use releases::HttpCatalogClient;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Issues access tokens.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Requests a token with the client-credentials grant.
    ///
    /// On success the returned token is guaranteed to be non-empty.
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;
}

/// Fetches catalog data on behalf of an authenticated client.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetches the first page of new album releases.
    ///
    /// `authorization` is the complete header value, `Bearer <token>`.
    async fn new_releases(&self, authorization: &str) -> Result<NewReleasesResponse, ApiError>;
}

/// Builds the `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("{}{}", BEARER_PREFIX, token)
}

/// Returns the token part of a bearer header value, if it has one.
pub fn bearer_token(authorization: &str) -> Option<&str> {
    authorization
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.trim().is_empty())
}

fn http_client(timeout: Option<std::time::Duration>) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ApiError::Configuration(format!("cannot build HTTP client: {}", e)))
}
