use std::sync::Arc;

use crate::{Res, config, server, server::AppState, warning};

pub async fn serve(addr: Option<String>) -> Res<()> {
    if config::spotify_client_id().is_none() || config::spotify_client_secret().is_none() {
        warning!("SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_SECRET is not set; /api/tracks will fail.");
    }

    let addr = addr.unwrap_or_else(config::server_addr);
    let state = Arc::new(AppState::from_env());
    server::start_api_server(state, &addr).await
}
