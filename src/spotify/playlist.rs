use std::collections::HashSet;

use crate::{
    spotify::client::{SERVICE, SpotifyClient},
    sync::SyncError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        GetUserPlaylistsResponse, Playlist, PlaylistItemsResponse,
    },
};

impl SpotifyClient {
    /// First playlist of the current user with exactly this name.
    pub async fn find_playlist(&self, name: &str) -> Result<Option<Playlist>, SyncError> {
        let mut next = Some(format!("{}?limit=50", self.url("/me/playlists")));

        while let Some(url) = next {
            let page: GetUserPlaylistsResponse = self.get_json(&url).await?;
            if let Some(playlist) = page.items.into_iter().find(|p| p.name == name) {
                return Ok(Some(playlist));
            }
            next = page.next;
        }

        Ok(None)
    }

    pub async fn create_playlist(&self, name: &str) -> Result<Playlist, SyncError> {
        let url = self.url(&format!("/users/{}/playlists", self.settings().user_id));
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: "Loved tracks synced from Last.fm by likesync".to_string(),
            public: false,
            collaborative: false,
        };

        self.send(|http, token| http.post(&url).bearer_auth(token).json(&body))
            .await?
            .json::<Playlist>()
            .await
            .map_err(|e| SyncError::unavailable(SERVICE, e))
    }

    /// URIs of every track currently in the playlist.
    pub async fn playlist_track_uris(&self, playlist_id: &str) -> Result<HashSet<String>, SyncError> {
        let mut uris = HashSet::new();
        let mut next = Some(format!(
            "{}?fields=items(track(uri)),next&limit=100",
            self.url(&format!("/playlists/{}/tracks", playlist_id))
        ));

        while let Some(url) = next {
            let page: PlaylistItemsResponse = self.get_json(&url).await?;
            uris.extend(page.items.into_iter().filter_map(|item| item.track).map(|t| t.uri));
            next = page.next;
        }

        Ok(uris)
    }

    /// Appends tracks; Spotify accepts at most 100 URIs per call.
    pub async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<AddTrackToPlaylistResponse, SyncError> {
        let url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let body = AddTrackToPlaylistRequest { uris };

        self.send(|http, token| http.post(&url).bearer_auth(token).json(&body))
            .await?
            .json::<AddTrackToPlaylistResponse>()
            .await
            .map_err(|e| SyncError::unavailable(SERVICE, e))
    }
}
