//! Spotify New Releases Service Library
//!
//! This library provides a small REST service that authenticates against the
//! Spotify Web API with the client-credentials flow and serves the current new
//! album releases. It includes modules for the HTTP endpoints, the Spotify
//! clients, configuration management and the command-line entry points.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served by the service
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error categories and their HTTP mapping
//! - `management` - Orchestration of token and catalog requests
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify Web API client contracts and implementations
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use spotify_api::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> spotify_api::Res<()> {
//!     config::load_env().await?;
//!     cli::serve(None).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;

/// Result alias for application plumbing such as binding and serving.
///
/// Spotify failures use [`error::ApiError`]; this boxed error only carries them
/// up to the CLI, together with I/O and address parse errors.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line with a blue `o` marker.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a green check line once a command has produced its result.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits with code 1.
///
/// Only for startup and one-shot CLI failures, such as missing credentials.
/// Request handlers report failures through [`error::ApiError`] instead and
/// never terminate the process.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line for a recoverable problem.
///
/// Upstream failures behind a 502 response are logged with this, keeping the
/// detail out of the response body.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
