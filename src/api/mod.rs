//! # API Module
//!
//! HTTP endpoints of the new-releases service.
//!
//! ## Endpoints
//!
//! - [`albums`] - `GET /spotify/api/albums`. Authenticates against Spotify with
//!   the client-credentials flow and returns the first page of new album
//!   releases as a JSON array. Upstream failures answer `502 Bad Gateway`.
//! - [`health`] - `GET /health`. Returns application status and version
//!   information for monitoring systems and load balancers.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotify_api::api::{albums, health};
//!
//! let app = Router::new()
//!     .route("/spotify/api/albums", get(albums))
//!     .route("/health", get(health))
//!     .with_state(manager);
//! ```

mod albums;
mod health;

pub use albums::albums;
pub use health::health;
