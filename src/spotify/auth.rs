use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Url};

use crate::{
    config::SpotifySettings,
    management::TokenManager,
    server::{AuthState, wait_for_callback},
    types::{Token, TokenResponse},
    utils, warning,
};

/// How long the user has to approve access in the browser.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the OAuth 2.0 PKCE flow against Spotify and caches the token.
///
/// The callback server must already be running on `state`; this function
/// opens the consent page, waits for [`crate::api::callback`] to deliver the
/// authorization code and exchanges it together with the code verifier.
pub async fn authorize(settings: &SpotifySettings, state: &AuthState) -> Result<TokenManager, String> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let auth_url = Url::parse_with_params(
        &settings.auth_url,
        &[
            ("client_id", settings.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", settings.redirect_uri.as_str()),
            ("code_challenge", code_challenge.as_str()),
            ("code_challenge_method", "S256"),
            ("scope", settings.scope.as_str()),
        ],
    )
    .map_err(|e| format!("Invalid Spotify auth url {}: {}", settings.auth_url, e))?;

    state.lock().await.spotify_code = None;

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let code = wait_for_callback(state, CALLBACK_TIMEOUT, |pending| pending.spotify_code.take())
        .await
        .ok_or_else(|| "Authentication failed or timed out.".to_string())?;

    let token = exchange_code_pkce(settings, &code, &code_verifier).await?;
    let manager = TokenManager::new(token, settings);
    manager
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    Ok(manager)
}

/// Trades a single-use authorization code for an access and refresh token.
pub async fn exchange_code_pkce(
    settings: &SpotifySettings,
    code: &str,
    verifier: &str,
) -> Result<Token, String> {
    let res = Client::new()
        .post(&settings.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", settings.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", settings.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| format!("Spotify rejected the authorization code: {}", e))?;

    let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .ok_or_else(|| "Spotify did not return a refresh token".to_string())?,
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
