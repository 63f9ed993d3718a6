use axum::response::Json;
use chrono::{SecondsFormat, Utc};

use crate::{
    config,
    types::{HealthEnv, HealthResponse},
};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION").to_string(),
        env: HealthEnv {
            client_id: presence(config::spotify_client_id()),
            client_secret: presence(config::spotify_client_secret()),
        },
    })
}

fn presence(value: Option<String>) -> String {
    match value {
        Some(_) => "Present",
        None => "Missing",
    }
    .to_string()
}
