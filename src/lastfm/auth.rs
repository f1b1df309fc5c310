use std::time::Duration;

use reqwest::Url;

use crate::{
    lastfm::client::LastFmClient,
    management::SessionManager,
    server::{AuthState, wait_for_callback},
    warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the Last.fm web authentication flow and caches the session.
///
/// The user approves access on last.fm, which redirects to
/// [`crate::api::lastfm_callback`] with a one-time token. The token is then
/// exchanged for a session key with a signed `auth.getSession` call.
pub async fn authorize(client: &LastFmClient, state: &AuthState) -> Result<SessionManager, String> {
    let settings = client.settings();
    let auth_url = Url::parse_with_params(
        &settings.auth_url,
        &[
            ("api_key", settings.api_key.as_str()),
            ("cb", settings.callback_url.as_str()),
        ],
    )
    .map_err(|e| format!("Invalid Last.fm auth url {}: {}", settings.auth_url, e))?;

    state.lock().await.lastfm_token = None;

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_callback(state, CALLBACK_TIMEOUT, |pending| pending.lastfm_token.take())
        .await
        .ok_or_else(|| "Authentication failed or timed out.".to_string())?;

    let response = client.get_session(&token).await.map_err(|e| e.to_string())?;
    let manager = SessionManager::new(response.session);
    manager
        .persist()
        .await
        .map_err(|e| format!("Failed to save session to cache: {}", e))?;

    Ok(manager)
}
