use std::{collections::HashSet, time::Duration};

use async_trait::async_trait;
use tokio::time::sleep;

use crate::{
    spotify::client::{SERVICE, SpotifyClient},
    sync::{LikedPage, LikedSource, SyncError, TargetCatalog, TrackRef},
    utils,
};

/// Saved tracks requested per page.
const PAGE_SIZE: usize = 50;

/// Search results considered per query.
const SEARCH_LIMIT: usize = 50;

/// Pause between consecutive library pages.
const PAGE_DELAY: Duration = Duration::from_millis(200);

#[async_trait]
impl LikedSource for SpotifyClient {
    fn name(&self) -> &'static str {
        SERVICE
    }

    /// Saved tracks keyed by track id, credited to their first artist.
    ///
    /// Local files and unavailable tracks come back without an id and are
    /// left out of the page.
    async fn liked_page(&self, offset: usize) -> Result<LikedPage, SyncError> {
        if offset > 0 {
            sleep(PAGE_DELAY).await;
        }

        let page = self.saved_tracks(offset, PAGE_SIZE).await?;
        let fetched = page.items.len();

        let tracks = page
            .items
            .into_iter()
            .filter_map(|saved| {
                let track = saved.track;
                let id = track.id?;
                let artist = track.artists.into_iter().next()?.name;
                Some(TrackRef::new(artist, track.name, id))
            })
            .collect();

        Ok(LikedPage {
            tracks,
            next_offset: (page.next.is_some() && fetched > 0).then_some(offset + fetched),
        })
    }
}

#[async_trait]
impl TargetCatalog for SpotifyClient {
    fn name(&self) -> &'static str {
        SERVICE
    }

    /// Every (track, artist) pairing of the results, keyed by track uri.
    async fn search(&self, query: &str) -> Result<Vec<TrackRef>, SyncError> {
        let response = self.search_tracks(query, SEARCH_LIMIT).await?;

        Ok(response
            .tracks
            .items
            .into_iter()
            .flat_map(|track| {
                let title = track.name;
                let uri = track.uri;
                track
                    .artists
                    .into_iter()
                    .map(move |artist| TrackRef::new(artist.name, title.clone(), uri.clone()))
            })
            .collect())
    }

    async fn like(&self, track: &TrackRef) -> Result<(), SyncError> {
        self.save_tracks(&[utils::spotify_id_from_uri(&track.id)])
            .await
    }

    async fn ensure_playlist(&self, name: &str) -> Result<String, SyncError> {
        if let Some(playlist) = self.find_playlist(name).await? {
            return Ok(playlist.id);
        }

        Ok(self.create_playlist(name).await?.id)
    }

    async fn playlist_track_ids(&self, playlist_id: &str) -> Result<HashSet<String>, SyncError> {
        self.playlist_track_uris(playlist_id).await
    }

    async fn add_to_playlist(&self, playlist_id: &str, track_ids: &[String]) -> Result<(), SyncError> {
        if track_ids.is_empty() {
            return Ok(());
        }

        self.add_tracks(playlist_id, track_ids.to_vec()).await?;
        Ok(())
    }
}
