use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Not always rotated on refresh.
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

// Spotify

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrack {
    /// Local files carry no id.
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    pub artists: Vec<SpotifyArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub track: SpotifyTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksResponse {
    pub items: Vec<SavedTrack>,
    pub total: u64,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<SpotifyTrack>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemTrack {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Removed or unavailable tracks come back as `null`.
    pub track: Option<PlaylistItemTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

// Last.fm

/// Last.fm collapses single-element lists into a bare object.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmApiError {
    pub error: u32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastFmSession {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub session: LastFmSession,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LovedArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LovedTrack {
    pub name: String,
    pub url: String,
    pub artist: LovedArtist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageAttr {
    pub page: String,
    #[serde(rename = "totalPages")]
    pub total_pages: String,
    #[serde(rename = "perPage")]
    pub per_page: String,
    pub total: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LovedTracks {
    #[serde(default, deserialize_with = "one_or_many")]
    pub track: Vec<LovedTrack>,
    #[serde(rename = "@attr")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LovedTracksResponse {
    pub lovedtracks: LovedTracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTrack {
    pub name: String,
    pub artist: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackMatches {
    #[serde(default, deserialize_with = "one_or_many")]
    pub track: Vec<SearchTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSearchResults {
    pub trackmatches: TrackMatches,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSearchResponse {
    pub results: TrackSearchResults,
}

// Tables

#[derive(Tabled)]
pub struct SyncSummaryRow {
    pub direction: String,
    pub seen: usize,
    pub skipped: usize,
    pub synced: usize,
    pub already_present: usize,
    pub missed: usize,
}

#[derive(Tabled)]
pub struct MissedTableRow {
    pub artist: String,
    pub title: String,
    pub reason: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct StateTableRow {
    pub direction: String,
    pub processed: usize,
    pub missed: String,
    pub last_run: String,
}
