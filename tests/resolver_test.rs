use std::{collections::VecDeque, sync::Mutex};

use likesync::sync::{
    Confirm, ConfirmPrompt, Interaction, MatchResolver, MatchTier, Resolution, TrackRef,
};

/// Answers prompts from a script and remembers what it was asked.
struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<(String, String)>>,
}

impl ScriptedConfirm {
    fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    fn asked(&self) -> Vec<(String, String)> {
        self.asked.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.asked.lock().unwrap().push(prompt.candidate.clone());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

fn track(artist: &str, title: &str, id: &str) -> TrackRef {
    TrackRef::new(artist, title, id)
}

fn source() -> TrackRef {
    track("Beyoncé", "Halo", "src-1")
}

#[test]
fn test_no_candidates() {
    let confirm = ScriptedConfirm::new(&[]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);

    assert!(matches!(resolver.resolve(&source(), &[]), Resolution::NoCandidates));
    assert!(confirm.asked().is_empty());
}

#[test]
fn test_exact_match_is_accepted_without_asking() {
    let confirm = ScriptedConfirm::new(&[]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let candidates = vec![track("BEYONCE", "Halo", "t-1")];

    let resolution = resolver.resolve(&source(), &candidates);

    let m = resolution.into_match().expect("should match");
    assert_eq!(m.tier, MatchTier::Exact);
    assert_eq!(m.target_id(), "t-1");
    assert_eq!(m.source.id, "src-1");
    assert!(confirm.asked().is_empty());
}

#[test]
fn test_first_exact_candidate_wins() {
    let confirm = ScriptedConfirm::new(&[]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let candidates = vec![
        track("Metallica", "One", "t-0"),
        track("Beyoncé", "Halo", "t-1"),
        track("Beyoncé", "Halo", "t-2"),
    ];

    let m = resolver.resolve(&source(), &candidates).into_match().unwrap();
    assert_eq!(m.target_id(), "t-1");
}

#[test]
fn test_ambiguous_candidates_are_asked_in_order_until_yes() {
    let confirm = ScriptedConfirm::new(&[false, true, true]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let candidates = vec![
        track("Beyoncé", "Halo (Live)", "t-1"),
        track("Beyoncé", "Halo - Remix", "t-2"),
        track("Beyoncé", "Halo (Acoustic)", "t-3"),
    ];

    let m = resolver.resolve(&source(), &candidates).into_match().unwrap();

    assert_eq!(m.tier, MatchTier::Confirmed);
    assert_eq!(m.target_id(), "t-2");
    assert_eq!(
        confirm.asked(),
        vec![
            ("beyoncé".to_string(), "halo (live)".to_string()),
            ("beyoncé".to_string(), "halo - remix".to_string()),
        ]
    );
}

#[test]
fn test_ambiguous_before_exact_is_asked_first() {
    let confirm = ScriptedConfirm::new(&[false]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let candidates = vec![
        track("Beyoncé", "Halo (Live)", "t-1"),
        track("Beyoncé", "Halo", "t-2"),
    ];

    let m = resolver.resolve(&source(), &candidates).into_match().unwrap();

    assert_eq!(m.target_id(), "t-2");
    assert_eq!(m.tier, MatchTier::Exact);
    assert_eq!(confirm.asked().len(), 1);
}

#[test]
fn test_all_declined() {
    let confirm = ScriptedConfirm::new(&[false, false]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let candidates = vec![
        track("Beyoncé", "Halo (Live)", "t-1"),
        track("Beyoncé", "Halo - Remix", "t-2"),
    ];

    let resolution = resolver.resolve(&source(), &candidates);

    assert!(matches!(resolution, Resolution::Declined { asked: 2 }));
    assert!(!resolution.is_match());
}

#[test]
fn test_non_interactive_never_asks() {
    let confirm = ScriptedConfirm::new(&[true]);
    let resolver = MatchResolver::new(&confirm, Interaction::NonInteractive);
    let candidates = vec![track("Beyoncé", "Halo (Live)", "t-1")];

    let resolution = resolver.resolve(&source(), &candidates);

    assert!(matches!(resolution, Resolution::Declined { asked: 1 }));
    assert!(confirm.asked().is_empty());
}

#[test]
fn test_non_interactive_still_accepts_exact() {
    let confirm = ScriptedConfirm::new(&[]);
    let resolver = MatchResolver::new(&confirm, Interaction::NonInteractive);
    let candidates = vec![
        track("Beyoncé", "Halo (Live)", "t-1"),
        track("Beyonce", "Halo", "t-2"),
    ];

    let m = resolver.resolve(&source(), &candidates).into_match().unwrap();
    assert_eq!(m.target_id(), "t-2");
    assert!(confirm.asked().is_empty());
}

#[test]
fn test_below_threshold() {
    let confirm = ScriptedConfirm::new(&[true]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let candidates = vec![
        track("Metallica", "One", "t-1"),
        // artist 86 + title 53 stays just below the confirmation tier
        track("Beyonce", "Halo (Live)", "t-2"),
    ];

    let resolution = resolver.resolve(&source(), &candidates);

    assert!(matches!(resolution, Resolution::BelowThreshold));
    assert!(confirm.asked().is_empty());
}

#[test]
fn test_prompt_mentions_both_tracks() {
    let prompt = ConfirmPrompt {
        candidate: ("beyoncé".into(), "halo (live)".into()),
        source: ("beyoncé".into(), "halo".into()),
        artist_score: 100,
        title_score: 53,
    };

    let text = prompt.to_string();
    assert!(text.contains("halo (live)"));
    assert!(text.contains("\"halo\""));
    assert!(text.ends_with("Answer \"y\" if yes: "));
}

#[test]
fn test_identical_catalog_entry_is_exact() {
    let confirm = ScriptedConfirm::new(&[]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let source = track("Daft Punk", "One More Time", "s1");
    let candidates = vec![track("daft punk", "one more time", "t1")];

    let m = resolver.resolve(&source, &candidates).into_match().unwrap();

    assert_eq!(m.target_id(), "t1");
    assert_eq!(m.tier, MatchTier::Exact);
}

#[test]
fn test_live_version_needs_confirmation() {
    let confirm = ScriptedConfirm::new(&[true]);
    let resolver = MatchResolver::new(&confirm, Interaction::Interactive);
    let source = track("Beyonce", "Halo", "s1");
    let candidates = vec![track("Beyonce", "Halo (Live)", "t1")];

    let m = resolver.resolve(&source, &candidates).into_match().unwrap();

    assert_eq!(m.tier, MatchTier::Confirmed);
    assert_eq!(confirm.asked().len(), 1);
}
