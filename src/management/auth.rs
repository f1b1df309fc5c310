use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config::{self, SpotifySettings},
    types::{Token, TokenResponse},
};

/// Keeps the Spotify OAuth token on disk and refreshes it before it expires.
pub struct TokenManager {
    token: Token,
    client_id: String,
    token_url: String,
}

impl TokenManager {
    pub fn new(token: Token, settings: &SpotifySettings) -> Self {
        TokenManager {
            token,
            client_id: settings.client_id.clone(),
            token_url: settings.token_url.clone(),
        }
    }

    pub async fn load(settings: &SpotifySettings) -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::new(token, settings))
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Access token valid for at least a few more minutes.
    pub async fn get_valid_token(&mut self) -> Result<String, String> {
        if self.is_expired() {
            self.token = self.refresh_token().await?;
            // a token that cannot be cached still works for this run
            let _ = self.persist().await;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= self.token.obtained_at + self.token.expires_in
    }

    async fn refresh_token(&self) -> Result<Token, String> {
        let client = Client::new();
        let res = client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.token.refresh_token.as_str()),
                ("client_id", self.client_id.as_str()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| format!("token refresh rejected: {}. Please run likesync auth spotify", e))?;

        let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;

        Ok(Token {
            access_token: json.access_token,
            refresh_token: json
                .refresh_token
                .unwrap_or_else(|| self.token.refresh_token.clone()),
            scope: json.scope,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/spotify-token.json");
        path
    }
}
