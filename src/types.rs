use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            grant_type: CLIENT_CREDENTIALS_GRANT.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Checks the constraints the token endpoint puts on a client-credentials
    /// request before anything goes over the wire.
    pub fn validate(&self) -> Result<(), String> {
        if self.grant_type != CLIENT_CREDENTIALS_GRANT {
            return Err(format!(
                "unsupported grant type '{}', expected '{}'",
                self.grant_type, CLIENT_CREDENTIALS_GRANT
            ));
        }
        if self.client_id.trim().is_empty() {
            return Err("client id must not be empty".to_string());
        }
        if self.client_secret.trim().is_empty() {
            return Err("client secret must not be empty".to_string());
        }
        Ok(())
    }

    pub fn as_form(&self) -> [(&str, &str); 3] {
        [
            ("grant_type", self.grant_type.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ]
    }
}

// keep the secret out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReleasesResponse {
    pub albums: AlbumsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsContainer {
    pub items: Vec<Album>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// An album object exactly as Spotify returned it.
///
/// The service never reshapes albums; the raw JSON is kept so that every
/// field the provider sends reaches the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Album(pub Value);

impl Album {
    pub fn id(&self) -> &str {
        self.str_field("id")
    }

    pub fn name(&self) -> &str {
        self.str_field("name")
    }

    pub fn release_date(&self) -> &str {
        self.str_field("release_date")
    }

    pub fn artist_names(&self) -> Vec<&str> {
        self.0["artists"]
            .as_array()
            .map(|artists| {
                artists
                    .iter()
                    .filter_map(|artist| artist["name"].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn str_field(&self, key: &str) -> &str {
        self.0[key].as_str().unwrap_or_default()
    }
}

impl From<Value> for Album {
    fn from(value: Value) -> Self {
        Album(value)
    }
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub date: String,
    pub name: String,
    pub artists: String,
}

impl From<&Album> for AlbumTableRow {
    fn from(album: &Album) -> Self {
        AlbumTableRow {
            date: album.release_date().to_string(),
            name: album.name().to_string(),
            artists: album.artist_names().join(", "),
        }
    }
}
