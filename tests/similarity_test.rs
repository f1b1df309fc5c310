use likesync::sync::similarity::{normalize, score};

#[test]
fn test_identical_strings_score_100() {
    assert_eq!(score("one more time", "one more time"), 100);
    assert_eq!(score("", ""), 100);
}

#[test]
fn test_empty_against_non_empty_scores_0() {
    assert_eq!(score("", "halo"), 0);
    assert_eq!(score("halo", ""), 0);
}

#[test]
fn test_disjoint_strings_score_0() {
    assert_eq!(score("abc", "xyz"), 0);
}

#[test]
fn test_score_is_symmetric() {
    let pairs = [
        ("halo", "halo (live)"),
        ("beyoncé", "beyonce"),
        ("the beatles", "beatles"),
        ("daft punk", "punk daft"),
    ];

    for (a, b) in pairs {
        assert_eq!(score(a, b), score(b, a), "{} / {}", a, b);
    }
}

#[test]
fn test_known_scores() {
    // 2 * 4 / (4 + 11)
    assert_eq!(score("halo", "halo (live)"), 53);
    // 2 * 6 / (7 + 7)
    assert_eq!(score("beyoncé", "beyonce"), 86);
    // 2 * 7 / (11 + 7)
    assert_eq!(score("the beatles", "beatles"), 78);
}

#[test]
fn test_score_counts_characters_not_bytes() {
    // 'é' is two bytes but one character
    assert_eq!(score("é", "é"), 100);
    assert_eq!(score("é", "e"), 0);
}

#[test]
fn test_normalize_lowercases() {
    assert_eq!(normalize("Daft Punk"), "daft punk");
    assert_eq!(normalize("BEYONCÉ"), "beyoncé");
    assert_eq!(score(&normalize("HALO"), &normalize("halo")), 100);
}
