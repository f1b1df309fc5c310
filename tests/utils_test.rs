use likesync::cli::is_yes;
use likesync::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());

    // Deterministic for the same verifier
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe base64 without padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_rfc7636_vector() {
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_search_query() {
    assert_eq!(search_query("Daft Punk", "One More Time"), "Daft Punk One More Time");
    assert_eq!(search_query("  Björk ", "Jóga  "), "Björk Jóga");
}

#[test]
fn test_spotify_id_from_uri() {
    assert_eq!(
        spotify_id_from_uri("spotify:track:4uLU6hMCjMI75M1A2tKUQC"),
        "4uLU6hMCjMI75M1A2tKUQC"
    );
    assert_eq!(spotify_id_from_uri("4uLU6hMCjMI75M1A2tKUQC"), "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_lastfm_signature() {
    let params = [
        ("method", "track.love"),
        ("api_key", "k"),
        ("sk", "s"),
        ("artist", "A"),
        ("track", "T"),
        ("format", "json"),
    ];

    // md5("api_keykartistAmethodtrack.loveskstrackTsecret")
    assert_eq!(
        lastfm_signature(&params, "secret"),
        "f022429242fe3b8de55060091d79f1c4"
    );
}

#[test]
fn test_lastfm_signature_ignores_order_and_format() {
    let a = [("track", "T"), ("artist", "A"), ("api_key", "k")];
    let b = [("api_key", "k"), ("format", "json"), ("artist", "A"), ("track", "T")];

    assert_eq!(lastfm_signature(&a, "secret"), lastfm_signature(&b, "secret"));
    assert_ne!(lastfm_signature(&a, "secret"), lastfm_signature(&a, "other"));
}

#[test]
fn test_parse_retry_after() {
    assert_eq!(parse_retry_after(Some("30")), 30);
    assert_eq!(parse_retry_after(Some(" 7 ")), 7);
    assert_eq!(parse_retry_after(Some("soon")), 0);
    assert_eq!(parse_retry_after(None), 0);
}

#[test]
fn test_is_yes() {
    assert!(is_yes("y\n"));
    assert!(is_yes("YES"));
    assert!(is_yes(" Yes "));
    assert!(!is_yes("n"));
    assert!(!is_yes(""));
    assert!(!is_yes("yeah"));
}
