use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{server::AuthState, warning};

/// Spotify redirects here with `?code=...` once the user granted access.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AuthState>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        warning!("Spotify authorization failed: {}", error);
        return Html("<h4>Login failed.</h4>");
    }

    match params.get("code") {
        Some(code) => {
            state.lock().await.spotify_code = Some(code.clone());
            Html("<h2>Spotify authorization received.</h2><p>Close browser window.</p>")
        }
        None => Html("<h4>Missing authorization code.</h4>"),
    }
}

/// Last.fm redirects here with `?token=...`.
pub async fn lastfm_callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AuthState>,
) -> Html<&'static str> {
    match params.get("token") {
        Some(token) => {
            state.lock().await.lastfm_token = Some(token.clone());
            Html("<h2>Last.fm authorization received.</h2><p>Close browser window.</p>")
        }
        None => Html("<h4>Missing Last.fm token.</h4>"),
    }
}
