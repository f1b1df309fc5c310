use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has format version {found}, expected {expected}", path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u64,
        expected: u32,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serde(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StorageError::Serde {
            path: path.into(),
            source,
        }
    }
}

/// Writes `contents` next to `path` and renames it into place, so readers
/// never observe a half-written file.
pub(crate) async fn write_atomic(path: &std::path::Path, contents: String) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::io(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    async_fs::write(&tmp, contents)
        .await
        .map_err(|e| StorageError::io(&tmp, e))?;
    async_fs::rename(&tmp, path)
        .await
        .map_err(|e| StorageError::io(path, e))
}
