use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, header::RETRY_AFTER};
use serde::de::DeserializeOwned;
use tokio::{sync::Mutex, time::sleep};

use crate::{
    config::SpotifySettings, management::TokenManager, sync::SyncError, utils, warning,
};

pub(crate) const SERVICE: &str = "Spotify";

/// Longest `Retry-After` we are willing to sit out.
const MAX_RETRY_AFTER_SECS: u64 = 120;

const MAX_BAD_GATEWAY_RETRIES: u32 = 5;

/// Authenticated Spotify Web API client.
///
/// Every request goes through [`SpotifyClient::send`], which attaches a fresh
/// access token and deals with the two transient failures Spotify is known
/// for: `502 Bad Gateway` (retried after 10 seconds) and
/// `429 Too Many Requests` (retried after `Retry-After`).
pub struct SpotifyClient {
    http: Client,
    settings: SpotifySettings,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(settings: SpotifySettings, tokens: TokenManager) -> Self {
        Self {
            http: Client::new(),
            settings,
            tokens: Mutex::new(tokens),
        }
    }

    /// Builds a client from the cached token of a previous `likesync auth spotify`.
    pub async fn from_cache(settings: SpotifySettings) -> Result<Self, SyncError> {
        let tokens = TokenManager::load(&settings).await.map_err(|e| {
            SyncError::unavailable(
                SERVICE,
                format!("failed to load token ({}). Please run likesync auth spotify", e),
            )
        })?;
        Ok(Self::new(settings, tokens))
    }

    pub fn settings(&self) -> &SpotifySettings {
        &self.settings
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api_url.trim_end_matches('/'), path)
    }

    /// Sends an authenticated request, retrying transient failures.
    ///
    /// `build` receives the shared HTTP client and a valid access token and
    /// returns the request to send. It is called again for every retry, so
    /// a token refreshed in between is picked up.
    ///
    /// # Retry Policy
    ///
    /// - `502 Bad Gateway`: wait 10 seconds and retry, at most 5 times
    /// - `429 Too Many Requests`: wait for `Retry-After` seconds and retry,
    ///   as long as the delay is at most 120 seconds; longer delays print a
    ///   warning and fail
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::CollaboratorUnavailable`] when the token cannot
    /// be refreshed, the request cannot be sent, or Spotify answers with any
    /// other error status.
    pub(crate) async fn send<F>(&self, build: F) -> Result<Response, SyncError>
    where
        F: Fn(&Client, &str) -> RequestBuilder,
    {
        let mut bad_gateway = 0;

        loop {
            let token = self
                .tokens
                .lock()
                .await
                .get_valid_token()
                .await
                .map_err(|e| SyncError::unavailable(SERVICE, e))?;

            let response = build(&self.http, &token)
                .send()
                .await
                .map_err(|e| SyncError::unavailable(SERVICE, e))?;

            match response.status() {
                StatusCode::BAD_GATEWAY if bad_gateway < MAX_BAD_GATEWAY_RETRIES => {
                    bad_gateway += 1;
                    sleep(Duration::from_secs(10)).await;
                    continue;
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let retry_after = utils::parse_retry_after(
                        response
                            .headers()
                            .get(RETRY_AFTER)
                            .and_then(|v| v.to_str().ok()),
                    );
                    if retry_after <= MAX_RETRY_AFTER_SECS {
                        sleep(Duration::from_secs(retry_after.max(1))).await;
                        continue;
                    }

                    warning!(
                        "Retry after has reached a abnormal high of {} seconds. Try your best tomorrow again.",
                        retry_after
                    );
                    return Err(SyncError::unavailable(
                        SERVICE,
                        format!("rate limited for {} seconds", retry_after),
                    ));
                }
                _ => {}
            }

            return response
                .error_for_status()
                .map_err(|e| SyncError::unavailable(SERVICE, e));
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SyncError> {
        self.send(|http, token| http.get(url).bearer_auth(token))
            .await?
            .json::<T>()
            .await
            .map_err(|e| SyncError::unavailable(SERVICE, e))
    }
}
