//! Spotify Library API Client
//!
//! This library provides an async client for the "library" endpoints of the
//! Spotify Web API, covering the authenticated user's collection of saved
//! tracks and saved albums. Every operation performs a single stateless HTTP
//! round trip under caller-supplied cancellation; there is no caching, no
//! retry logic, and no pagination traversal.
//!
//! # Modules
//!
//! - `auth` - Bearer token supply for outgoing requests
//! - `config` - Client configuration and environment variables
//! - `error` - Error types and the API error envelope
//! - `library` - The library client and its operations
//! - `types` - Data structures decoded from API responses
//!
//! # Example
//!
//! ```
//! use spotilib::LibraryClient;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> spotilib::Result<()> {
//!     let client = LibraryClient::with_token("BQC...");
//!     let cancel = CancellationToken::new();
//!
//!     let saved = client
//!         .user_has_tracks(&cancel, &["4iV5W9uYEdYUVa79Axb7Rh"])
//!         .await?;
//!     println!("saved: {:?}", saved);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod library;
pub mod types;

pub use auth::{StaticToken, TokenProvider};
pub use config::Config;
pub use error::{Error, Result};
pub use library::LibraryClient;
pub use types::{Album, SavedItem, SavedTracksPage, Track};
