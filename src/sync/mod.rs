//! # Sync Module
//!
//! Cross-catalog matching and one-directional synchronization of liked tracks.
//!
//! A run reads the liked tracks of a source service page by page, skips every
//! track already recorded in the direction's processed set, searches the
//! target catalog for the rest and lets the [`MatchResolver`] decide which
//! candidate, if any, is the same track. Matches are applied on the target
//! (like or playlist insertion), misses are recorded for manual follow-up.
//!
//! The services themselves sit behind [`LikedSource`] and [`TargetCatalog`],
//! the human behind [`Confirm`].

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod collaborators;
pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod similarity;
pub mod track;

pub use collaborators::{LikedPage, LikedSource, TargetCatalog};
pub use error::SyncError;
pub use orchestrator::{Delivery, SyncOptions, SyncReport, Syncer};
pub use resolver::{Confirm, ConfirmPrompt, Interaction, MatchResolver, Resolution};
pub use track::{MatchTier, SyncMatch, TrackRef};

/// Name of the Spotify playlist Last.fm loves are collected in.
pub const DEFAULT_PLAYLIST: &str = "lastfm_liked";

/// Playlist insertions are sent in chunks of this size.
pub const PLAYLIST_CHUNK_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Spotify saved tracks become Last.fm loves
    SpotifyToLastfm,
    /// Last.fm loves land on Spotify
    LastfmToSpotify,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::SpotifyToLastfm, Direction::LastfmToSpotify];

    pub fn slug(&self) -> &'static str {
        match self {
            Direction::SpotifyToLastfm => "spotify-to-lastfm",
            Direction::LastfmToSpotify => "lastfm-to-spotify",
        }
    }

    /// Name of the service matches are written to.
    pub fn target_service(&self) -> &'static str {
        match self {
            Direction::SpotifyToLastfm => "Last.fm",
            Direction::LastfmToSpotify => "Spotify",
        }
    }

    /// Only Spotify has playlists.
    pub fn supports_playlists(&self) -> bool {
        matches!(self, Direction::LastfmToSpotify)
    }

    /// How matches are applied when the user does not choose.
    pub fn default_delivery(&self) -> Delivery {
        match self {
            Direction::SpotifyToLastfm => Delivery::Like,
            Direction::LastfmToSpotify => Delivery::Playlist {
                name: DEFAULT_PLAYLIST.to_string(),
            },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
