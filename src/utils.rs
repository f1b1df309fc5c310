use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Catalog search query for a track.
pub fn search_query(artist: &str, title: &str) -> String {
    format!("{} {}", artist.trim(), title.trim())
}

/// Extracts the bare id from a `spotify:track:<id>` URI; other input is
/// returned unchanged.
pub fn spotify_id_from_uri(uri: &str) -> &str {
    uri.strip_prefix("spotify:track:").unwrap_or(uri)
}

/// Last.fm `api_sig`: md5 over every parameter as `key + value`, sorted by
/// key, followed by the shared secret. `format` and `callback` are not signed.
pub fn lastfm_signature(params: &[(&str, &str)], secret: &str) -> String {
    let mut signed: Vec<&(&str, &str)> = params
        .iter()
        .filter(|(key, _)| *key != "format" && *key != "callback")
        .collect();
    signed.sort_by(|a, b| a.0.cmp(b.0));

    let mut raw = String::new();
    for (key, value) in signed {
        raw.push_str(key);
        raw.push_str(value);
    }
    raw.push_str(secret);

    format!("{:x}", md5::compute(raw.as_bytes()))
}

/// Parses a `Retry-After` header value in seconds.
pub fn parse_retry_after(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
