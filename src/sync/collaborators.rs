use std::collections::HashSet;

use async_trait::async_trait;

use crate::sync::{error::SyncError, track::TrackRef};

/// One page of a service's liked tracks.
#[derive(Debug, Clone, Default)]
pub struct LikedPage {
    pub tracks: Vec<TrackRef>,
    /// Offset to pass for the following page, `None` once exhausted.
    pub next_offset: Option<usize>,
}

/// The service liked tracks are read from.
///
/// Pages are requested lazily starting at offset 0, so every run re-reads the
/// list from the beginning.
#[async_trait]
pub trait LikedSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn liked_page(&self, offset: usize) -> Result<LikedPage, SyncError>;
}

/// The service matches are searched in and written to.
#[async_trait]
pub trait TargetCatalog: Send + Sync {
    fn name(&self) -> &'static str;

    /// Catalog search for a free-text query, results in relevance order.
    async fn search(&self, query: &str) -> Result<Vec<TrackRef>, SyncError>;

    /// Marks a catalog track as liked.
    async fn like(&self, track: &TrackRef) -> Result<(), SyncError>;

    /// Returns the id of the playlist called `name`, creating it if needed.
    async fn ensure_playlist(&self, _name: &str) -> Result<String, SyncError> {
        Err(SyncError::Unsupported {
            service: self.name(),
            operation: "playlists",
        })
    }

    async fn playlist_track_ids(&self, _playlist_id: &str) -> Result<HashSet<String>, SyncError> {
        Err(SyncError::Unsupported {
            service: self.name(),
            operation: "playlists",
        })
    }

    /// Appends tracks to a playlist in the given order.
    async fn add_to_playlist(&self, _playlist_id: &str, _ids: &[String]) -> Result<(), SyncError> {
        Err(SyncError::Unsupported {
            service: self.name(),
            operation: "playlists",
        })
    }
}
