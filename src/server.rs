use axum::{
    Extension, Router,
    http::{HeaderName, Method},
    routing::get,
};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    Res, api, config, info,
    spotify::{CatalogClient, TokenCache},
    success,
    utils::IdMode,
};

/// Everything the handlers share: the token cache and the Spotify client.
pub struct AppState {
    pub tokens: TokenCache,
    pub catalog: CatalogClient,
    pub id_mode: IdMode,
}

impl AppState {
    pub fn new(tokens: TokenCache, catalog: CatalogClient, id_mode: IdMode) -> Self {
        AppState {
            tokens,
            catalog,
            id_mode,
        }
    }

    pub fn from_env() -> Self {
        let client = Client::new();
        AppState {
            tokens: TokenCache::from_env(client.clone()),
            catalog: CatalogClient::from_env(client),
            id_mode: config::playlist_id_mode(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([HeaderName::from_static("content-type")]);

    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/tracks", get(api::tracks).options(api::tracks_options))
        .layer(Extension(state))
        .layer(cors)
}

/// Binds `addr` and serves the API until Ctrl-C.
///
/// The cached token is dropped on shutdown.
pub async fn start_api_server(state: Arc<AppState>, addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.tokens.clear().await;
    success!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
