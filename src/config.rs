//! Configuration management for Guessify.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Two locations are consulted, earlier ones winning because `dotenv`
//! never overrides variables that are already set:
//! 1. Environment variables of the process
//! 2. `.env` file in the local data directory (`guessify/.env`)
//! 3. `.env` file in the current working directory
//!
//! Everything except the Spotify client credentials has a default. The
//! credentials are looked up each time the token cache refreshes, so a server
//! started without them still answers `/api/health` and reports the problem
//! on `/api/tracks` instead of refusing to start.

use std::{env, path::PathBuf};

use crate::utils::IdMode;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:4000";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// Creates the platform-specific data directory if needed and loads
/// `guessify/.env` from it when present:
/// - Linux: `~/.local/share/guessify/.env`
/// - macOS: `~/Library/Application Support/guessify/.env`
/// - Windows: `%LOCALAPPDATA%/guessify/.env`
///
/// A `.env` in the working directory is loaded afterwards.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed. A missing file is not an error.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    // Local overrides for development; absence is fine.
    let _ = dotenv::dotenv();
    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("guessify/.env");
    path
}

/// Address the API server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Base URL of a running Guessify server, used by `guessify play`
/// (`GUESSIFY_SERVER_URL`).
pub fn server_url() -> String {
    env::var("GUESSIFY_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// Spotify client id (`SPOTIFY_CLIENT_ID`). Empty values count as missing.
pub fn spotify_client_id() -> Option<String> {
    non_empty_var("SPOTIFY_CLIENT_ID")
}

/// Spotify client secret (`SPOTIFY_CLIENT_SECRET`). Empty values count as missing.
///
/// Never log the value itself; [`crate::api::health`] only reports presence.
pub fn spotify_client_secret() -> Option<String> {
    non_empty_var("SPOTIFY_CLIENT_SECRET")
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Spotify token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// How unparseable playlist references are treated (`PLAYLIST_ID_MODE`).
///
/// `lenient` forwards the raw input to Spotify; anything else, including an
/// unset variable, rejects it with a 400.
pub fn playlist_id_mode() -> IdMode {
    match env::var("PLAYLIST_ID_MODE") {
        Ok(mode) if mode.trim().eq_ignore_ascii_case("lenient") => IdMode::Lenient,
        _ => IdMode::Strict,
    }
}

/// External audio command used by `guessify play` (`GUESSIFY_PLAYER_CMD`),
/// e.g. `mpv --no-video --really-quiet`. The preview URL is appended as the
/// last argument.
pub fn player_command() -> Option<String> {
    non_empty_var("GUESSIFY_PLAYER_CMD")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
