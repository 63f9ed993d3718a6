use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{error::ApiError, info, server::AppState, types::Track, utils, warning};

#[derive(Debug, Deserialize)]
pub struct TracksQuery {
    pub url: Option<String>,
}

pub async fn tracks(
    query: Result<Query<TracksQuery>, QueryRejection>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Track>>, ApiError> {
    let result = match query {
        Ok(Query(params)) => load_tracks(params, &state).await,
        Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
    };
    if let Err(e) = &result {
        warning!("GET /api/tracks failed ({}): {}", e.status().as_u16(), e);
    }
    result.map(Json)
}

async fn load_tracks(params: TracksQuery, state: &AppState) -> Result<Vec<Track>, ApiError> {
    let playlist_url = params
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("No playlist URL provided.".to_string()))?;

    let playlist_id = utils::extract_playlist_id(&playlist_url, state.id_mode).ok_or_else(|| {
        ApiError::Validation(
            "Invalid playlist URL format. Please use a valid Spotify playlist URL.".to_string(),
        )
    })?;
    info!("GET /api/tracks playlist={}", playlist_id);

    let token = state.tokens.get_token().await?;
    let tracks = state.catalog.fetch_tracks(&token, &playlist_id).await?;

    info!("Playlist {} has {} playable tracks", playlist_id, tracks.len());
    Ok(tracks)
}

/// Bare `OPTIONS` without preflight headers; CORS preflights never get here.
pub async fn tracks_options() -> StatusCode {
    StatusCode::OK
}
