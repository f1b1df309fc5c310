use std::{collections::BTreeSet, io::ErrorKind, path::PathBuf};

use crate::{
    config,
    management::error::{StorageError, write_atomic},
    sync::Direction,
};

/// Identifiers of source tracks already synchronized in one direction.
///
/// Stored as a sorted JSON array of strings. A missing or blank file is an
/// empty set; anything that does not parse is an error rather than a reset.
pub struct ProcessedCache {
    path: PathBuf,
}

impl ProcessedCache {
    pub fn for_direction(direction: Direction) -> Self {
        let mut path = config::data_dir();
        path.push(format!("state/processed-{}.json", direction.slug()));
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub async fn load(&self) -> Result<BTreeSet<String>, StorageError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeSet::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::serde(&self.path, e))
    }

    pub async fn save(&self, ids: &BTreeSet<String>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(ids).map_err(|e| StorageError::serde(&self.path, e))?;
        write_atomic(&self.path, json).await
    }

    /// Forgets every processed id of this direction.
    pub async fn clear(&self) -> Result<(), StorageError> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }
}
