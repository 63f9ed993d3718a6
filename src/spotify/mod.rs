//! # Spotify Integration Module
//!
//! The thin layer between Guessify and the Spotify Web API.
//!
//! ```text
//! /api/tracks handler
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials token cache)
//!     └── Playlist retrieval (first 50 items, previews only)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 client-credentials grant. No user is
//! involved: the client id and secret are exchanged for an app token that can
//! read public playlists. The token is kept in a [`auth::TokenCache`] owned by
//! the server state and refreshed a minute before Spotify would expire it.
//! The cache takes its clock and credentials by injection so that tests can
//! drive expiry without waiting.
//!
//! ## Playlists
//!
//! [`playlist`] fetches `GET /playlists/{id}/tracks?limit=50`, discards empty
//! slots (deleted or local tracks come back as `null`) and tracks Spotify
//! offers no `preview_url` for, and projects the rest into
//! [`crate::types::Track`].
//!
//! ## Error Types
//!
//! - [`crate::error::AuthError`] - missing credentials, rejected or malformed token exchange
//! - [`crate::error::ApiError`] - upstream status codes, transport failures, bad payloads

pub mod auth;
pub mod playlist;

pub use auth::{Clock, CredentialSource, SystemClock, TokenCache};
pub use playlist::CatalogClient;
