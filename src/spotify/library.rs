use serde_json::json;

use crate::{
    spotify::client::{SERVICE, SpotifyClient},
    sync::SyncError,
    types::{SavedTracksResponse, SearchResponse},
};

impl SpotifyClient {
    /// One page of the user's saved ("liked") tracks, newest first.
    pub async fn saved_tracks(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<SavedTracksResponse, SyncError> {
        let url = self.url("/me/tracks");
        self.send(|http, token| {
            http.get(&url)
                .bearer_auth(token)
                .query(&[("limit", limit), ("offset", offset)])
        })
        .await?
        .json::<SavedTracksResponse>()
        .await
        .map_err(|e| SyncError::unavailable(SERVICE, e))
    }

    /// Adds tracks to the user's library (at most 50 ids per call).
    pub async fn save_tracks(&self, ids: &[&str]) -> Result<(), SyncError> {
        let url = self.url("/me/tracks");
        let body = json!({ "ids": ids });
        self.send(|http, token| http.put(&url).bearer_auth(token).json(&body))
            .await?;
        Ok(())
    }

    pub async fn search_tracks(&self, query: &str, limit: usize) -> Result<SearchResponse, SyncError> {
        let url = self.url("/search");
        let limit = limit.to_string();
        self.send(|http, token| {
            http.get(&url)
                .bearer_auth(token)
                .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
        })
        .await?
        .json::<SearchResponse>()
        .await
        .map_err(|e| SyncError::unavailable(SERVICE, e))
    }
}
