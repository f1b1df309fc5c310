use std::sync::Arc;

use clap::ValueEnum;
use tokio::sync::Mutex;

use crate::{
    config::{self, LastFmSettings, SpotifySettings},
    error, lastfm,
    lastfm::LastFmClient,
    server::{AuthState, PendingAuth, start_api_server},
    spotify, success, warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Service {
    Spotify,
    Lastfm,
}

/// Authorizes likesync with one service and caches the credentials.
pub async fn auth(service: Service) {
    let state: AuthState = Arc::new(Mutex::new(PendingAuth::default()));

    let addr = config::server_addr();
    let server_state = Arc::clone(&state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(&addr, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    match service {
        Service::Spotify => {
            let settings = match SpotifySettings::from_env() {
                Ok(settings) => settings,
                Err(e) => error!("{}", e),
            };

            match spotify::auth::authorize(&settings, &state).await {
                Ok(_) => success!("Authentication successful!"),
                Err(e) => error!("{}", e),
            }
        }
        Service::Lastfm => {
            let settings = match LastFmSettings::from_env() {
                Ok(settings) => settings,
                Err(e) => error!("{}", e),
            };

            let client = LastFmClient::new(settings, None);
            match lastfm::auth::authorize(&client, &state).await {
                Ok(manager) => success!(
                    "Authentication successful! Signed in as {}.",
                    manager.session().name
                ),
                Err(e) => error!("{}", e),
            }
        }
    }
}
