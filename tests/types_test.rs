use likesync::types::{LovedTracksResponse, SavedTracksResponse, TrackSearchResponse};

#[test]
fn test_loved_tracks_page() {
    let json = r##"{
        "lovedtracks": {
            "track": [
                {"name": "Halo", "url": "https://www.last.fm/music/Beyonc%C3%A9/_/Halo",
                 "artist": {"name": "Beyoncé", "url": "https://www.last.fm/music/Beyonc%C3%A9"},
                 "date": {"uts": "1700000000", "#text": "14 Nov 2023, 22:13"}},
                {"name": "One", "url": "https://www.last.fm/music/Metallica/_/One",
                 "artist": {"name": "Metallica", "url": "https://www.last.fm/music/Metallica"}}
            ],
            "@attr": {"user": "someone", "totalPages": "3", "page": "1", "perPage": "50", "total": "120"}
        }
    }"##;

    let response: LovedTracksResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.lovedtracks.track.len(), 2);
    assert_eq!(response.lovedtracks.track[0].artist.name, "Beyoncé");
    assert_eq!(response.lovedtracks.attr.total_pages, "3");
}

#[test]
fn test_loved_tracks_single_track_is_not_a_list() {
    let json = r#"{
        "lovedtracks": {
            "track": {"name": "One", "url": "u", "artist": {"name": "Metallica"}},
            "@attr": {"totalPages": "1", "page": "1", "perPage": "50", "total": "1"}
        }
    }"#;

    let response: LovedTracksResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.lovedtracks.track.len(), 1);
}

#[test]
fn test_loved_tracks_empty() {
    let json = r#"{
        "lovedtracks": {
            "@attr": {"totalPages": "0", "page": "1", "perPage": "50", "total": "0"}
        }
    }"#;

    let response: LovedTracksResponse = serde_json::from_str(json).unwrap();
    assert!(response.lovedtracks.track.is_empty());
}

#[test]
fn test_track_search_results() {
    let json = r#"{
        "results": {
            "opensearch:totalResults": "2",
            "trackmatches": {
                "track": [
                    {"name": "Halo", "artist": "Beyoncé", "url": "u1", "listeners": "1"},
                    {"name": "Halo (Live)", "artist": "Beyoncé", "url": "u2", "listeners": "1"}
                ]
            }
        }
    }"#;

    let response: TrackSearchResponse = serde_json::from_str(json).unwrap();
    let names: Vec<&str> = response
        .results
        .trackmatches
        .track
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["Halo", "Halo (Live)"]);
}

#[test]
fn test_saved_tracks_with_local_file() {
    let json = r#"{
        "items": [
            {"added_at": "2024-01-01T00:00:00Z",
             "track": {"id": "abc", "name": "Halo", "uri": "spotify:track:abc",
                       "artists": [{"name": "Beyoncé"}, {"name": "Guest"}]}},
            {"added_at": "2024-01-01T00:00:00Z",
             "track": {"id": null, "name": "Demo", "uri": "spotify:local:x", "artists": []}}
        ],
        "total": 2,
        "next": null
    }"#;

    let response: SavedTracksResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].track.id.as_deref(), Some("abc"));
    assert_eq!(response.items[0].track.artists[0].name, "Beyoncé");
    assert!(response.items[1].track.id.is_none());
    assert!(response.next.is_none());
}
