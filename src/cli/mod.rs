//! # CLI Module
//!
//! User-facing commands of the new-releases service.
//!
//! - [`serve`] - Runs the REST service until the process is stopped
//! - [`list_releases`] - Runs the token-then-catalog sequence once and prints
//!   the new releases as a table or as raw JSON
//!
//! Both commands read their configuration through [`crate::config`] and
//! terminate with an error message when it is incomplete.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotify-api serve                        # Serve GET /spotify/api/albums
//! spotify-api serve --address 0.0.0.0:80   # Bind elsewhere
//! spotify-api releases                     # Print new releases
//! spotify-api releases --json              # Print the raw album objects
//! ```

mod releases;
mod serve;

pub use releases::list_releases;
pub use releases::render_table;
pub use serve::serve;
