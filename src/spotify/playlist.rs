use reqwest::{Client, Url};

use crate::{
    config,
    error::ApiError,
    types::{PlaylistItem, PlaylistTracksResponse, Track},
    warning,
};

/// Spotify caps a playlist page at this many items.
pub const PLAYLIST_PAGE_LIMIT: u32 = 50;

/// Reads playlist contents from the Spotify Web API.
pub struct CatalogClient {
    client: Client,
    api_url: String,
}

impl CatalogClient {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        CatalogClient {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env(client: Client) -> Self {
        Self::new(client, config::spotify_apiurl())
    }

    /// Fetches the first page of a playlist and keeps the tracks that can be
    /// previewed.
    ///
    /// A playlist without a single previewable track yields an empty vector,
    /// not an error. The id always lands in a single path segment,
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Upstream`] for any non-success status, with the body
    /// - [`ApiError::Transport`] when Spotify cannot be reached
    /// - [`ApiError::Malformed`] when the payload is not JSON or has no `items`
    pub async fn fetch_tracks(&self, token: &str, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
        let mut api_url = Url::parse(&self.api_url)
            .map_err(|e| ApiError::Malformed(format!("Invalid Spotify API url: {}", e)))?;
        api_url
            .path_segments_mut()
            .map_err(|_| ApiError::Malformed("Spotify API url cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(["playlists", playlist_id, "tracks"]);
        api_url
            .query_pairs_mut()
            .append_pair("limit", &PLAYLIST_PAGE_LIMIT.to_string());

        let response = self.client.get(api_url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warning!("Spotify API error ({}): {}", status.as_u16(), body);
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let payload: PlaylistTracksResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Malformed(format!("Malformed playlist response: {}", e)))?;

        let items = payload
            .items
            .ok_or_else(|| ApiError::Malformed("No items in playlist response.".to_string()))?;

        Ok(playable_tracks(items))
    }
}

/// Drops empty slots and tracks without a preview, then projects the rest.
pub fn playable_tracks(items: Vec<PlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .filter_map(|track| {
            let preview_url = track.preview_url.filter(|url| !url.trim().is_empty())?;
            let artist = track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            Some(Track {
                name: track.name,
                artist,
                preview_url,
            })
        })
        .collect()
}
