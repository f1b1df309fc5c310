use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// A track as reported by one of the services.
///
/// Artist and title are kept exactly as the service returned them; comparison
/// strings are derived by the resolver. Two references are equal when their
/// identifiers are equal, regardless of the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRef {
    pub artist: String,
    pub title: String,
    pub id: String,
}

impl TrackRef {
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            id: id.into(),
        }
    }
}

impl PartialEq for TrackRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TrackRef {}

impl Hash for TrackRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TrackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Which decision band produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Artist and title both cleared the exact threshold.
    Exact,
    /// Combined score was high enough to ask, and the answer was yes.
    Confirmed,
}

/// A source track paired with the target-catalog track it resolved to.
#[derive(Debug, Clone)]
pub struct SyncMatch {
    pub source: TrackRef,
    pub target: TrackRef,
    pub tier: MatchTier,
}

impl SyncMatch {
    pub fn target_id(&self) -> &str {
        &self.target.id
    }
}
