use async_trait::async_trait;

use crate::{
    lastfm::client::{LastFmClient, SERVICE},
    sync::{LikedPage, LikedSource, SyncError, TargetCatalog, TrackRef},
};

/// Loved tracks requested per page.
const PAGE_SIZE: usize = 50;

/// Search results considered per query.
const SEARCH_LIMIT: usize = 30;

#[async_trait]
impl LikedSource for LastFmClient {
    fn name(&self) -> &'static str {
        SERVICE
    }

    /// Loved tracks keyed by their track page url.
    async fn liked_page(&self, offset: usize) -> Result<LikedPage, SyncError> {
        let page = offset / PAGE_SIZE + 1;
        let response = self.loved_tracks(page, PAGE_SIZE).await?.lovedtracks;

        let total_pages = response.attr.total_pages.parse::<usize>().unwrap_or(0);
        let fetched = response.track.len();

        let tracks = response
            .track
            .into_iter()
            .map(|track| TrackRef::new(track.artist.name, track.name, track.url))
            .collect();

        Ok(LikedPage {
            tracks,
            next_offset: (page < total_pages && fetched > 0).then_some(page * PAGE_SIZE),
        })
    }
}

#[async_trait]
impl TargetCatalog for LastFmClient {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn search(&self, query: &str) -> Result<Vec<TrackRef>, SyncError> {
        let response = self.search_tracks(query, SEARCH_LIMIT).await?;

        Ok(response
            .results
            .trackmatches
            .track
            .into_iter()
            .map(|track| TrackRef::new(track.artist, track.name, track.url))
            .collect())
    }

    async fn like(&self, track: &TrackRef) -> Result<(), SyncError> {
        self.love_track(&track.artist, &track.title).await
    }
}
