//! Error types for the server and the game client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::types::ErrorBody;

/// Failure to obtain a bearer token.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing Spotify credentials")]
    MissingCredentials,

    #[error("Failed to get Spotify token: {0}")]
    TokenRejected(String),

    #[error("Failed to reach Spotify token endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed Spotify token response: {0}")]
    Malformed(String),
}

/// Everything that can go wrong while serving `/api/tracks`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Spotify API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to reach Spotify: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Auth(_) | ApiError::Transport(_) | ApiError::Malformed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message placed in the `{error}` body.
    pub fn message(&self) -> String {
        match self {
            ApiError::Upstream { status: 404, .. } => {
                "Playlist not found. Make sure the playlist exists and is public.".to_string()
            }
            ApiError::Upstream { status: 401, .. } => {
                "Authentication failed. Please check Spotify API credentials.".to_string()
            }
            ApiError::Upstream { status: 403, .. } => {
                "Access forbidden. Make sure the playlist is public.".to_string()
            }
            ApiError::Validation(msg) | ApiError::Malformed(msg) => msg.clone(),
            upstream @ ApiError::Upstream { .. } => upstream.to_string(),
            other => format!("Server error: {}", other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Failure to load a track list from a Guessify server.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not reach the Guessify server: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response from the server: {0}")]
    Malformed(String),

    #[error("No tracks with a preview were found in this playlist.")]
    Empty,
}

/// A game action that does not apply to the current state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}
