use std::path::PathBuf;

use crate::{config, types::LastFmSession};

/// Last.fm session keys do not expire, so the session is stored once after
/// authorization and reused until the user revokes it.
pub struct SessionManager {
    session: LastFmSession,
}

impl SessionManager {
    pub fn new(session: LastFmSession) -> Self {
        Self { session }
    }

    pub async fn load() -> Result<Self, String> {
        let content = async_fs::read_to_string(Self::session_path())
            .await
            .map_err(|e| e.to_string())?;
        let session: LastFmSession = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { session })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.session).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub fn session(&self) -> &LastFmSession {
        &self.session
    }

    fn session_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/lastfm-session.json");
        path
    }
}
