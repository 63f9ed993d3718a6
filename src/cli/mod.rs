//! # CLI Module
//!
//! Entry points behind the `guessify` subcommands.
//!
//! - [`serve`] - runs the HTTP API that turns a playlist link into playable
//!   previews (`/api/tracks`, `/api/health`)
//! - [`play`] - a terminal front-end for the game that talks to a running
//!   server
//!
//! ## Usage Patterns
//!
//! ```bash
//! guessify serve                                   # API on 127.0.0.1:4000
//! guessify play https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! guessify play spotify:playlist:37i9dQZF1DXcBWIGoYBM5M --shuffle
//! GUESSIFY_PLAYER_CMD="mpv --no-video --really-quiet" guessify play <id>
//! ```

mod play;
mod serve;

pub use play::play;
pub use serve::serve;
