use std::fmt;

use crate::sync::{
    similarity::{normalize, score},
    track::{MatchTier, SyncMatch, TrackRef},
};

/// Both artist and title must reach this score for an automatic match.
pub const EXACT_MATCH_SCORE: u8 = 85;

/// Combined artist + title score from which a human is asked to decide.
pub const CONFIRM_MATCH_SCORE: u16 = 140;

/// Whether ambiguous candidates may be put in front of a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Interactive,
    /// Ambiguous candidates are declined without asking.
    NonInteractive,
}

/// Question put to the confirmation channel for an ambiguous candidate.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub candidate: (String, String),
    pub source: (String, String),
    pub artist_score: u8,
    pub title_score: u8,
}

impl fmt::Display for ConfirmPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Are these the same track? {:?} and {:?} (artist {}%, title {}%). Answer \"y\" if yes: ",
            self.candidate, self.source, self.artist_score, self.title_score
        )
    }
}

/// Yes/no channel consulted for ambiguous candidates.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Outcome of resolving one source track against a list of candidates.
#[derive(Debug, Clone)]
pub enum Resolution {
    Matched(SyncMatch),
    /// The catalog search returned nothing.
    NoCandidates,
    /// No candidate reached either tier.
    BelowThreshold,
    /// Some candidates were ambiguous but none was confirmed.
    Declined { asked: usize },
}

impl Resolution {
    pub fn into_match(self) -> Option<SyncMatch> {
        match self {
            Resolution::Matched(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

/// Picks at most one candidate for a source track.
///
/// Candidates are examined in the order given and the first one that lands in
/// a match tier wins:
///
/// 1. artist and title scores both at least [`EXACT_MATCH_SCORE`]: match.
/// 2. otherwise, combined score at least [`CONFIRM_MATCH_SCORE`]: ask the
///    confirmation channel; yes is a match, no moves on to the next candidate.
///
/// The resolver knows nothing about which targets are already present on the
/// destination; filtering those is up to the caller.
pub struct MatchResolver<'a> {
    confirm: &'a dyn Confirm,
    interaction: Interaction,
}

impl<'a> MatchResolver<'a> {
    pub fn new(confirm: &'a dyn Confirm, interaction: Interaction) -> Self {
        Self {
            confirm,
            interaction,
        }
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Picks at most one candidate as the same track as `source`.
    ///
    /// Candidates are examined in the given order and never re-sorted. For
    /// each one, artist and title of both sides are normalized and scored:
    ///
    /// 1. **Exact**: both scores reach [`EXACT_MATCH_SCORE`]. The candidate
    ///    is returned immediately without asking anyone.
    /// 2. **Ambiguous**: the combined score reaches [`CONFIRM_MATCH_SCORE`].
    ///    In interactive mode the confirmation channel is asked once; a yes
    ///    returns the candidate, a no moves on to the next one. In
    ///    non-interactive mode the candidate counts as declined.
    /// 3. Anything lower is ignored.
    ///
    /// The first candidate that clears a tier wins, even if a later one
    /// would have scored higher.
    ///
    /// # Arguments
    ///
    /// * `source` - the liked track to find in the target catalog
    /// * `candidates` - catalog search results, in relevance order
    ///
    /// # Returns
    ///
    /// - `Resolution::Matched` with the tier that accepted the candidate
    /// - `Resolution::NoCandidates` if the search returned nothing
    /// - `Resolution::Declined` if ambiguous candidates existed but none was
    ///   confirmed
    /// - `Resolution::BelowThreshold` otherwise
    ///
    /// Which candidates already exist on the target is not considered here;
    /// the caller filters matches after resolution.
    pub fn resolve(&self, source: &TrackRef, candidates: &[TrackRef]) -> Resolution {
        if candidates.is_empty() {
            return Resolution::NoCandidates;
        }

        let source_artist = normalize(&source.artist);
        let source_title = normalize(&source.title);
        let mut ambiguous = 0;

        for candidate in candidates {
            let candidate_artist = normalize(&candidate.artist);
            let candidate_title = normalize(&candidate.title);

            let artist_score = score(&source_artist, &candidate_artist);
            let title_score = score(&source_title, &candidate_title);

            if artist_score >= EXACT_MATCH_SCORE && title_score >= EXACT_MATCH_SCORE {
                return Resolution::Matched(SyncMatch {
                    source: source.clone(),
                    target: candidate.clone(),
                    tier: MatchTier::Exact,
                });
            }

            if u16::from(artist_score) + u16::from(title_score) < CONFIRM_MATCH_SCORE {
                continue;
            }

            ambiguous += 1;
            if self.interaction == Interaction::NonInteractive {
                continue;
            }

            let prompt = ConfirmPrompt {
                candidate: (candidate_artist, candidate_title),
                source: (source_artist.clone(), source_title.clone()),
                artist_score,
                title_score,
            };
            if self.confirm.confirm(&prompt) {
                return Resolution::Matched(SyncMatch {
                    source: source.clone(),
                    target: candidate.clone(),
                    tier: MatchTier::Confirmed,
                });
            }
        }

        if ambiguous > 0 {
            Resolution::Declined { asked: ambiguous }
        } else {
            Resolution::BelowThreshold
        }
    }
}
