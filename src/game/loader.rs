use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    error::LoadError,
    types::{ErrorBody, Track},
};

/// Fetches track lists from a running Guessify server.
pub struct TrackLoader {
    client: Client,
    server_url: String,
}

impl TrackLoader {
    pub fn new(client: Client, server_url: impl Into<String>) -> Self {
        TrackLoader {
            client,
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(Client::new(), config::server_url())
    }

    /// Calls `GET /api/tracks?url=<playlist>`.
    ///
    /// Each way of failing is reported separately so the player sees why:
    /// the server could not be reached, it answered with an error, it
    /// answered with something that is not a track array, or the playlist
    /// has nothing playable.
    pub async fn load(&self, playlist: &str) -> Result<Vec<Track>, LoadError> {
        let res = self
            .client
            .get(format!("{}/api/tracks", self.server_url))
            .query(&[("url", playlist)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("Server error ({})", status.as_u16()));
            return Err(LoadError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let json: Value =
            serde_json::from_str(&body).map_err(|e| LoadError::Malformed(e.to_string()))?;
        if !json.is_array() {
            return Err(LoadError::Malformed("expected a list of tracks".to_string()));
        }

        let tracks: Vec<Track> =
            serde_json::from_value(json).map_err(|e| LoadError::Malformed(e.to_string()))?;
        if tracks.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(tracks)
    }
}
