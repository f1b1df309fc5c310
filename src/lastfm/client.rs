use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    config::LastFmSettings,
    management::SessionManager,
    sync::SyncError,
    types::{LastFmApiError, LastFmSession},
    utils, warning,
};

pub(crate) const SERVICE: &str = "Last.fm";

/// Last.fm error code for "rate limit exceeded".
const RATE_LIMITED: u32 = 29;

const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Client for the Last.fm 2.0 API.
///
/// Read calls only need the api key; write calls are signed with the shared
/// secret and carry the session key of an authorized user.
pub struct LastFmClient {
    http: Client,
    settings: LastFmSettings,
    session: Option<LastFmSession>,
}

impl LastFmClient {
    pub fn new(settings: LastFmSettings, session: Option<LastFmSession>) -> Self {
        Self {
            http: Client::new(),
            settings,
            session,
        }
    }

    /// Builds a client with the session cached by `likesync auth lastfm`.
    pub async fn from_cache(settings: LastFmSettings) -> Result<Self, SyncError> {
        let manager = SessionManager::load().await.map_err(|e| {
            SyncError::unavailable(
                SERVICE,
                format!("failed to load session ({}). Please run likesync auth lastfm", e),
            )
        })?;
        Ok(Self::new(settings, Some(manager.session().clone())))
    }

    pub fn settings(&self) -> &LastFmSettings {
        &self.settings
    }

    pub(crate) fn session(&self) -> Result<&LastFmSession, SyncError> {
        self.session.as_ref().ok_or_else(|| {
            SyncError::unavailable(SERVICE, "not authorized. Please run likesync auth lastfm")
        })
    }

    /// Unsigned read call.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<T, SyncError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("method", method),
            ("api_key", self.settings.api_key.as_str()),
            ("format", "json"),
        ];
        query.extend_from_slice(params);

        self.call(|| self.http.get(&self.settings.api_url).query(&query))
            .await
    }

    /// Signed call; `sk` is added when the method needs a session.
    pub(crate) async fn post_signed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, &str)],
        with_session: bool,
    ) -> Result<T, SyncError> {
        let mut form: Vec<(&str, &str)> = vec![
            ("method", method),
            ("api_key", self.settings.api_key.as_str()),
        ];
        if with_session {
            form.push(("sk", self.session()?.key.as_str()));
        }
        form.extend_from_slice(params);

        let signature = utils::lastfm_signature(&form, &self.settings.api_secret);
        form.push(("api_sig", signature.as_str()));
        form.push(("format", "json"));

        self.call(|| self.http.post(&self.settings.api_url).form(&form))
            .await
    }

    async fn call<T, F>(&self, build: F) -> Result<T, SyncError>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempts = 0;

        loop {
            let response = build()
                .send()
                .await
                .map_err(|e| SyncError::unavailable(SERVICE, e))?;

            match parse_response(response).await {
                Err(api) if api.error == RATE_LIMITED && attempts < MAX_RATE_LIMIT_RETRIES => {
                    attempts += 1;
                    warning!("Last.fm rate limit reached, retrying in 10 seconds");
                    sleep(Duration::from_secs(10)).await;
                }
                Err(api) => {
                    return Err(SyncError::unavailable(
                        SERVICE,
                        format!("error {}: {}", api.error, api.message),
                    ));
                }
                Ok(body) => {
                    return serde_json::from_value(body)
                        .map_err(|e| SyncError::unavailable(SERVICE, e));
                }
            }
        }
    }
}

/// Last.fm reports failures as `{"error": <code>, "message": ...}`, often
/// with a 200 status.
async fn parse_response(response: Response) -> Result<Value, LastFmApiError> {
    let status = response.status();
    let body: Value = response.json().await.map_err(|e| LastFmApiError {
        error: 0,
        message: format!("{} ({})", e, status),
    })?;

    if body.get("error").is_some() {
        return Err(serde_json::from_value::<LastFmApiError>(body).unwrap_or_else(|e| {
            LastFmApiError {
                error: 0,
                message: e.to_string(),
            }
        }));
    }

    if !status.is_success() {
        return Err(LastFmApiError {
            error: 0,
            message: format!("unexpected status {}", status),
        });
    }

    Ok(body)
}
