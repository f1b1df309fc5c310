use std::{io::ErrorKind, path::PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    config,
    management::error::{StorageError, write_atomic},
    sync::{Direction, TrackRef},
};

pub const MISSED_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    NoCandidates,
    BelowThreshold,
    Declined,
}

impl MissReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissReason::NoCandidates => "no candidates",
            MissReason::BelowThreshold => "below threshold",
            MissReason::Declined => "declined",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedTrack {
    pub artist: String,
    pub title: String,
    pub id: String,
    pub reason: MissReason,
}

impl MissedTrack {
    pub fn new(track: &TrackRef, reason: MissReason) -> Self {
        Self {
            artist: track.artist.clone(),
            title: track.title.clone(),
            id: track.id.clone(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissedReport {
    pub version: u32,
    pub direction: Direction,
    pub recorded_at: DateTime<Utc>,
    pub tracks: Vec<MissedTrack>,
}

/// Tracks of the latest run that could not be matched. Each run replaces the
/// previous list.
pub struct MissedStore {
    path: PathBuf,
}

impl MissedStore {
    pub fn for_direction(direction: Direction) -> Self {
        let mut path = config::data_dir();
        path.push(format!("missed/{}.json", direction.slug()));
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub async fn save(&self, direction: Direction, tracks: &[MissedTrack]) -> Result<(), StorageError> {
        let report = MissedReport {
            version: MISSED_FORMAT_VERSION,
            direction,
            recorded_at: Utc::now(),
            tracks: tracks.to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&report).map_err(|e| StorageError::serde(&self.path, e))?;
        write_atomic(&self.path, json).await
    }

    /// `None` when no run has recorded anything yet.
    pub async fn load(&self) -> Result<Option<MissedReport>, StorageError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        // check the version before the layout, later formats may differ in shape
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| StorageError::serde(&self.path, e))?;
        let found = value
            .get("version")
            .and_then(|v| v.as_u64())
            .unwrap_or_default();
        if u32::try_from(found).ok() != Some(MISSED_FORMAT_VERSION) {
            return Err(StorageError::UnsupportedVersion {
                path: self.path.clone(),
                found,
                expected: MISSED_FORMAT_VERSION,
            });
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::serde(&self.path, e))
    }
}
