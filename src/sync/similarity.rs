//! String canonicalization and similarity scoring used when comparing tracks
//! across catalogs.

use rapidfuzz::fuzz;

/// Canonical form used for every artist/title comparison.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Similarity of two strings on a 0..=100 scale, higher is more similar.
///
/// The score is the indel ratio `2 * lcs / (len(a) + len(b))` over
/// characters, where `lcs` is the length of the longest common subsequence.
/// Two empty strings score 100, an empty string against a non-empty one
/// scores 0.
///
/// # Examples
///
/// ```
/// use likesync::sync::similarity::score;
///
/// assert_eq!(score("halo", "halo (live)"), 53);
/// assert_eq!(score("beyoncé", "beyonce"), 86);
/// ```
pub fn score(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }

    let ratio = fuzz::ratio(a.chars(), b.chars());
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
