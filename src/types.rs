use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A playable track as served by `/api/tracks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub name: String,
    pub artist: String,
    #[serde(alias = "preview_url")]
    pub preview_url: String,
}

/// Client credentials used for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// The bearer token currently held by the token cache.
#[derive(Debug, Clone)]
pub struct CachedCredential {
    pub token: String,
    pub expires_at_epoch_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: i64,
}

/// Response of `GET /playlists/{id}/tracks`. Only the fields Guessify reads
/// are modelled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Option<Vec<PlaylistItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub env: HealthEnv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEnv {
    pub client_id: String,
    pub client_secret: String,
}

/// One line of the end-of-game summary.
#[derive(Tabled)]
pub struct RoundTableRow {
    #[tabled(rename = "#")]
    pub number: usize,
    pub track: String,
    pub artist: String,
    pub result: String,
    pub points: u32,
}
