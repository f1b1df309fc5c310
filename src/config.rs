//! Configuration management for likesync.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. The file is looked up in this order:
//! 1. the path named by `LIKESYNC_ENV_FILE`
//! 2. `likesync/.env` in the platform-specific local data directory
//!
//! Variables already present in the environment win over the file. Settings
//! are read once into [`SpotifySettings`] / [`LastFmSettings`] and handed to
//! the clients that need them.

use std::{env, io::ErrorKind, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("cannot load environment file: {0}")]
    Env(String),
}

/// Root of everything likesync stores locally.
///
/// - Linux: `~/.local/share/likesync`
/// - macOS: `~/Library/Application Support/likesync`
/// - Windows: `%LOCALAPPDATA%/likesync`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("likesync");
    path
}

/// Loads environment variables from the `.env` file.
///
/// A missing file is not an error; a file that exists but cannot be parsed is.
///
/// # Example
///
/// ```
/// use likesync::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), ConfigError> {
    let path = match env::var("LIKESYNC_ENV_FILE") {
        Ok(path) => PathBuf::from(path),
        Err(_) => {
            let dir = data_dir();
            async_fs::create_dir_all(&dir)
                .await
                .map_err(|e| ConfigError::Env(e.to_string()))?;
            dir.join(".env")
        }
    };

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ConfigError::Env(format!("{}: {}", path.display(), e))),
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS", "127.0.0.1:8888")
}

#[derive(Debug, Clone)]
pub struct SpotifySettings {
    /// `SPOTIFY_USER_ID`, owner of created playlists
    pub user_id: String,
    /// `SPOTIFY_API_AUTH_CLIENT_ID`
    pub client_id: String,
    /// `SPOTIFY_API_REDIRECT_URI`, must match the app registration
    pub redirect_uri: String,
    /// `SPOTIFY_API_AUTH_SCOPE`
    pub scope: String,
    /// `SPOTIFY_API_AUTH_URL`
    pub auth_url: String,
    /// `SPOTIFY_API_URL`
    pub api_url: String,
    /// `SPOTIFY_API_TOKEN_URL`
    pub token_url: String,
}

impl SpotifySettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            user_id: required("SPOTIFY_USER_ID")?,
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            redirect_uri: optional("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8888/callback"),
            scope: optional(
                "SPOTIFY_API_AUTH_SCOPE",
                "user-library-read user-library-modify playlist-read-private playlist-modify-private playlist-modify-public",
            ),
            auth_url: optional("SPOTIFY_API_AUTH_URL", "https://accounts.spotify.com/authorize"),
            api_url: optional("SPOTIFY_API_URL", "https://api.spotify.com/v1"),
            token_url: optional("SPOTIFY_API_TOKEN_URL", "https://accounts.spotify.com/api/token"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LastFmSettings {
    /// `LASTFM_API_KEY`
    pub api_key: String,
    /// `LASTFM_API_SECRET`, used to sign write calls
    pub api_secret: String,
    /// `LASTFM_API_URL`
    pub api_url: String,
    /// `LASTFM_AUTH_URL`
    pub auth_url: String,
    /// `LASTFM_CALLBACK_URL`, where Last.fm sends the auth token
    pub callback_url: String,
}

impl LastFmSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: required("LASTFM_API_KEY")?,
            api_secret: required("LASTFM_API_SECRET")?,
            api_url: optional("LASTFM_API_URL", "https://ws.audioscrobbler.com/2.0/"),
            auth_url: optional("LASTFM_AUTH_URL", "https://www.last.fm/api/auth/"),
            callback_url: optional("LASTFM_CALLBACK_URL", "http://127.0.0.1:8888/lastfm/callback"),
        })
    }
}
