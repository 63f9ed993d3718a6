//! Guessify Library
//!
//! A song guessing game built around short Spotify previews. The server half
//! exchanges client credentials for a bearer token and turns a public playlist
//! into a list of playable previews; the game half reveals ever longer slices of
//! each preview and scores how quickly the player names the track.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for `/api/tracks` and `/api/health`
//! - `cli` - Command-line entry points (`serve`, `play`)
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared by the server and the game client
//! - `game` - Game session state machine, playback ticker and players
//! - `server` - Axum router and server lifecycle
//! - `spotify` - Token cache and playlist retrieval against the Spotify Web API
//! - `types` - Data structures and wire types
//! - `utils` - Playlist id parsing, guess matching and scoring
//!
//! # Example
//!
//! ```
//! use guessify::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> guessify::Res<()> {
//!     config::load_env().await?;
//!     cli::serve(None).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command-line plumbing where any error ends up printed to the
/// user. Library seams use the typed errors from [`error`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the binary: it terminates the process with exit code 1, so
/// request handlers and library code report failures through [`warning!`]
/// and typed errors instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems: upstream failures surfaced to a client,
/// a player command that could not be spawned, a missing `.env` file.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
