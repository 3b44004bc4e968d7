//! Configuration management for the Spotify new-releases service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Credentials are never compiled into the binary; they
//! are read here and handed to the clients through [`SpotifyConfig`].
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{error::ApiError, types::Credentials};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is read first, then the one located in the
/// platform-specific local data directory under `spotify-api/.env`. Variables that
/// are already set are never overwritten, and a missing file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotify-api/.env`
/// - macOS: `~/Library/Application Support/spotify-api/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-api/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(e.to_string());
        }
    }

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-api/.env");
    path
}

/// Returns the address the REST service binds to.
///
/// Reads `SERVER_ADDRESS`, falling back to `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID from `SPOTIFY_API_AUTH_CLIENT_ID`.
pub fn spotify_client_id() -> Result<String, ApiError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret from `SPOTIFY_API_AUTH_CLIENT_SECRET`.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Result<String, ApiError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the Spotify OAuth token URL, e.g. `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the optional transport timeout from `SPOTIFY_API_TIMEOUT_SECS`.
///
/// Unset means transport defaults. A value must be a whole number of seconds above 0.
pub fn spotify_timeout() -> Result<Option<Duration>, ApiError> {
    match env::var("SPOTIFY_API_TIMEOUT_SECS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(0) => Err(ApiError::Configuration(
                "SPOTIFY_API_TIMEOUT_SECS must be greater than 0".to_string(),
            )),
            Ok(secs) => Ok(Some(Duration::from_secs(secs))),
            Err(e) => Err(ApiError::Configuration(format!(
                "SPOTIFY_API_TIMEOUT_SECS '{}': {}",
                raw, e
            ))),
        },
        Err(_) => Ok(None),
    }
}

fn required(name: &str) -> Result<String, ApiError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Configuration(format!("{} must be set", name))),
    }
}

/// Everything the Spotify clients and the release manager need at construction time.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub credentials: Credentials,
    pub token_url: String,
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl SpotifyConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Call [`load_env`] beforehand so `.env` files are taken into account.
    pub fn from_env() -> Result<Self, ApiError> {
        let credentials =
            Credentials::client_credentials(spotify_client_id()?, spotify_client_secret()?);
        credentials.validate().map_err(ApiError::Configuration)?;

        Ok(SpotifyConfig {
            credentials,
            token_url: spotify_apitoken_url(),
            api_url: spotify_apiurl(),
            timeout: spotify_timeout()?,
        })
    }
}
