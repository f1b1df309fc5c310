use serde_json::Value;

use crate::{
    lastfm::client::LastFmClient,
    sync::SyncError,
    types::{LovedTracksResponse, SessionResponse, TrackSearchResponse},
};

impl LastFmClient {
    /// One page (1-based) of the authorized user's loved tracks.
    pub async fn loved_tracks(&self, page: usize, limit: usize) -> Result<LovedTracksResponse, SyncError> {
        let user = self.session()?.name.clone();
        let page = page.to_string();
        let limit = limit.to_string();

        self.get(
            "user.getLovedTracks",
            &[("user", user.as_str()), ("page", page.as_str()), ("limit", limit.as_str())],
        )
        .await
    }

    pub async fn search_tracks(&self, query: &str, limit: usize) -> Result<TrackSearchResponse, SyncError> {
        let limit = limit.to_string();
        self.get("track.search", &[("track", query), ("limit", limit.as_str())])
            .await
    }

    pub async fn love_track(&self, artist: &str, title: &str) -> Result<(), SyncError> {
        self.post_signed::<Value>("track.love", &[("artist", artist), ("track", title)], true)
            .await?;
        Ok(())
    }

    /// Trades a web-auth token for a permanent session.
    pub async fn get_session(&self, token: &str) -> Result<SessionResponse, SyncError> {
        self.post_signed("auth.getSession", &[("token", token)], false)
            .await
    }
}
