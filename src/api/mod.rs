//! # API Module
//!
//! HTTP endpoints served by `guessify serve`.
//!
//! ## Endpoints
//!
//! - [`tracks`] - `GET /api/tracks?url=<playlist>` resolves a pasted playlist
//!   link, URI or id and answers with the playable tracks as
//!   `[{name, artist, previewUrl}]`. Failures come back as `{error}` with a
//!   status mirroring the cause: 400 for a missing or unreadable reference,
//!   401/403/404 when Spotify refuses the playlist, 500 for credential,
//!   network and payload problems. A query string that cannot be read is a
//!   400 as well. A bare `OPTIONS` answers 200 with no body.
//! - [`health`] - `GET /api/health` reports liveness, the crate version and
//!   whether the Spotify credentials are configured (never their values).
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use guessify::server::{AppState, router};
//!
//! let app = router(Arc::new(AppState::from_env()));
//! ```

mod health;
mod tracks;

pub use health::health;
pub use tracks::{TracksQuery, tracks, tracks_options};
