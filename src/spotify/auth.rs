use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    error::AuthError,
    info,
    types::{CachedCredential, Credentials, TokenResponse},
    warning,
};

/// Seconds shaved off `expires_in` so a token is refreshed before Spotify
/// starts rejecting it.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Source of "now" for expiry checks.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Where the client id and secret come from at refresh time.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`, read on every refresh.
    Env,
    Static(Credentials),
}

impl CredentialSource {
    fn resolve(&self) -> Result<Credentials, AuthError> {
        let creds = match self {
            CredentialSource::Env => Credentials {
                client_id: config::spotify_client_id().unwrap_or_default(),
                client_secret: config::spotify_client_secret().unwrap_or_default(),
            },
            CredentialSource::Static(creds) => creds.clone(),
        };

        if creds.client_id.trim().is_empty() || creds.client_secret.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(creds)
    }
}

/// Holds one client-credentials bearer token and refreshes it lazily.
///
/// The lock is held across a refresh, so callers arriving while a token is
/// being fetched wait for it instead of issuing their own request.
pub struct TokenCache {
    client: Client,
    token_url: String,
    credentials: CredentialSource,
    clock: Arc<dyn Clock>,
    cached: Mutex<Option<CachedCredential>>,
}

impl TokenCache {
    pub fn new(client: Client, token_url: impl Into<String>, credentials: CredentialSource) -> Self {
        Self::with_clock(client, token_url, credentials, Arc::new(SystemClock))
    }

    pub fn with_clock(
        client: Client,
        token_url: impl Into<String>,
        credentials: CredentialSource,
        clock: Arc<dyn Clock>,
    ) -> Self {
        TokenCache {
            client,
            token_url: token_url.into(),
            credentials,
            clock,
            cached: Mutex::new(None),
        }
    }

    /// Token cache configured from the environment.
    pub fn from_env(client: Client) -> Self {
        Self::new(client, config::spotify_apitoken_url(), CredentialSource::Env)
    }

    /// Returns a valid bearer token, fetching a new one when none is cached or
    /// the cached one is past its expiry.
    pub async fn get_token(&self) -> Result<String, AuthError> {
        let mut cached = self.cached.lock().await;
        let now = self.clock.now_ms();

        if let Some(credential) = cached.as_ref() {
            if now <= credential.expires_at_epoch_ms {
                return Ok(credential.token.clone());
            }
        }

        let credential = self.request_token(now).await?;
        let token = credential.token.clone();
        *cached = Some(credential);
        Ok(token)
    }

    /// Drops the cached token; the next [`get_token`](Self::get_token) refreshes.
    pub async fn clear(&self) {
        *self.cached.lock().await = None;
    }

    pub async fn cached(&self) -> Option<CachedCredential> {
        self.cached.lock().await.clone()
    }

    async fn request_token(&self, now: i64) -> Result<CachedCredential, AuthError> {
        let creds = self.credentials.resolve()?;
        info!("Requesting Spotify access token...");

        let basic = STANDARD.encode(format!("{}:{}", creds.client_id, creds.client_secret));
        let res = self
            .client
            .post(&self.token_url)
            .header(reqwest::header::AUTHORIZATION, format!("Basic {}", basic))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warning!("Token request failed ({}): {}", status, body);
            return Err(AuthError::TokenRejected(body));
        }

        let body = res.text().await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::Malformed(e.to_string()))?;

        let expires_at_epoch_ms = token
            .expires_in
            .checked_sub(EXPIRY_MARGIN_SECS)
            .and_then(|secs| secs.checked_mul(1000))
            .and_then(|ms| now.checked_add(ms))
            .ok_or_else(|| {
                AuthError::Malformed(format!("Token expiry out of range: {}", token.expires_in))
            })?;

        Ok(CachedCredential {
            token: token.access_token,
            expires_at_epoch_ms,
        })
    }
}
