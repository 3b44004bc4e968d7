use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::warning;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Authentication against Spotify failed: {0}")]
    Authentication(String),
    #[error("Fetching new releases from Spotify failed: {0}")]
    CatalogFetch(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Authentication(_) => "authentication_failed",
            ApiError::CatalogFetch(_) => "catalog_fetch_failed",
            ApiError::Configuration(_) => "configuration_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Authentication(_) | ApiError::CatalogFetch(_) => StatusCode::BAD_GATEWAY,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Authentication(_) => "Could not authenticate against the music provider.",
            ApiError::CatalogFetch(_) => "Could not fetch new releases from the music provider.",
            ApiError::Configuration(_) => "The service is misconfigured.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // upstream detail is logged, never sent to the caller
        warning!("{}", self);

        let body = Json(json!({
            "error": self.kind(),
            "message": self.public_message(),
        }));

        (self.status(), body).into_response()
    }
}
