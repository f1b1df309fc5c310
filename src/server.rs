use axum::{Extension, Router, routing::get};
use std::{
    net::SocketAddr,
    str::FromStr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

use crate::api;

/// Values delivered by the auth callbacks, waiting to be picked up by the
/// flow that opened the browser.
#[derive(Debug, Default)]
pub struct PendingAuth {
    /// Spotify authorization code
    pub spotify_code: Option<String>,
    /// Last.fm auth token
    pub lastfm_token: Option<String>,
}

pub type AuthState = Arc<Mutex<PendingAuth>>;

pub fn router(state: AuthState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/lastfm/callback", get(api::lastfm_callback))
        .layer(Extension(state))
}

pub async fn start_api_server(addr: &str, state: AuthState) -> Result<(), String> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    axum::serve(listener, router(state))
        .await
        .map_err(|e| e.to_string())
}

/// Polls the shared state until `take` yields a value or `max_wait` passes.
pub async fn wait_for_callback<T>(
    state: &AuthState,
    max_wait: Duration,
    take: impl Fn(&mut PendingAuth) -> Option<T>,
) -> Option<T> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        {
            let mut lock = state.lock().await;
            if let Some(value) = take(&mut *lock) {
                return Some(value);
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
