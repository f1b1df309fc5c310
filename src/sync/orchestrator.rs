use std::collections::{BTreeSet, HashSet};

use indicatif::ProgressBar;

use crate::{
    info,
    management::{MissReason, MissedStore, MissedTrack, ProcessedCache},
    sync::{
        Direction, PLAYLIST_CHUNK_SIZE,
        collaborators::{LikedSource, TargetCatalog},
        error::SyncError,
        resolver::{Confirm, Interaction, MatchResolver, Resolution},
        track::{SyncMatch, TrackRef},
    },
    utils, warning,
};

/// How a resolved match is applied on the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Like each match right away.
    Like,
    /// Append matches to the named playlist, in chunks.
    Playlist { name: String },
}

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub direction: Direction,
    pub delivery: Delivery,
    pub interaction: Interaction,
    pub verbose: bool,
    pub chunk_size: usize,
}

impl SyncOptions {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            delivery: direction.default_delivery(),
            interaction: Interaction::Interactive,
            verbose: false,
            chunk_size: PLAYLIST_CHUNK_SIZE,
        }
    }
}

/// Counters of a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Liked tracks read from the source.
    pub seen: usize,
    /// Tracks skipped because an earlier run processed them.
    pub skipped: usize,
    /// Tracks whose side effect was applied on the target.
    pub synced: usize,
    /// Matches that were already present on the target.
    pub already_present: usize,
    pub missed: usize,
}

#[derive(Default)]
struct Run {
    processed: BTreeSet<String>,
    // source ids whose effect went through during this run
    pending: BTreeSet<String>,
    // source ids handled during this run, matched or not
    handled: HashSet<String>,
    used_targets: HashSet<String>,
    staged: Vec<SyncMatch>,
    missed: Vec<MissedTrack>,
    report: SyncReport,
}

/// Drives one direction of synchronization.
///
/// Progress is checkpointed at the end of every run, including runs aborted
/// by a service failure: ids whose like or playlist insertion already went
/// through are persisted before the error is returned, so a retry does not
/// repeat those effects.
pub struct Syncer<'a> {
    source: &'a dyn LikedSource,
    target: &'a dyn TargetCatalog,
    resolver: MatchResolver<'a>,
    processed: ProcessedCache,
    missed: MissedStore,
    options: SyncOptions,
    progress: Option<ProgressBar>,
}

impl<'a> Syncer<'a> {
    pub fn new(
        source: &'a dyn LikedSource,
        target: &'a dyn TargetCatalog,
        confirm: &'a dyn Confirm,
        options: SyncOptions,
    ) -> Self {
        Self {
            source,
            target,
            resolver: MatchResolver::new(confirm, options.interaction),
            processed: ProcessedCache::for_direction(options.direction),
            missed: MissedStore::for_direction(options.direction),
            options,
            progress: None,
        }
    }

    pub fn with_storage(mut self, processed: ProcessedCache, missed: MissedStore) -> Self {
        self.processed = processed;
        self.missed = missed;
        self
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Runs one synchronization pass.
    ///
    /// # Flow
    ///
    /// 1. Loads the processed set of the direction.
    /// 2. For playlist delivery, finds or creates the playlist and remembers
    ///    the tracks it already holds.
    /// 3. Reads the source's liked tracks page by page from the start. Each
    ///    track not processed before is searched on the target and resolved.
    /// 4. A match is liked right away, or staged and appended to the
    ///    playlist in chunks of `chunk_size`, in resolution order. A match
    ///    that is already on the target only gets marked as processed.
    /// 5. Misses are collected with their reason.
    /// 6. Checkpoint: ids whose effect went through are added to the
    ///    processed set and the missed list of this run is written.
    ///
    /// The checkpoint also runs when a step fails, so a retry never repeats
    /// a like or playlist insertion that already happened.
    ///
    /// # Returns
    ///
    /// The run's counters on success.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Storage`] if the processed set cannot be loaded (no
    ///   request is made in that case) or the checkpoint cannot be written
    /// - [`SyncError::CollaboratorUnavailable`] when a service call fails
    /// - [`SyncError::Unsupported`] when playlist delivery is requested from
    ///   a target without playlists
    ///
    /// When both the pass and the checkpoint fail, the pass's error is
    /// returned and the checkpoint failure is printed as a warning.
    pub async fn sync_likes(&self) -> Result<SyncReport, SyncError> {
        let mut run = Run {
            processed: self.processed.load().await?,
            ..Run::default()
        };

        let outcome = self.run(&mut run).await;
        let checkpoint = self.checkpoint(&run).await;

        match (outcome, checkpoint) {
            (Ok(()), Ok(())) => Ok(run.report),
            (Ok(()), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(checkpoint_err)) => {
                self.suspended(|| warning!("Cannot checkpoint progress: {}", checkpoint_err));
                Err(e)
            }
        }
    }

    async fn run(&self, run: &mut Run) -> Result<(), SyncError> {
        let playlist = match &self.options.delivery {
            Delivery::Like => None,
            Delivery::Playlist { name } => {
                let id = self.target.ensure_playlist(name).await?;
                let present = self.target.playlist_track_ids(&id).await?;
                self.note(|| {
                    format!(
                        "{} playlist {} holds {} tracks",
                        self.target.name(),
                        name,
                        present.len()
                    )
                });
                run.used_targets.extend(present);
                Some(id)
            }
        };

        let mut offset = Some(0);
        while let Some(current) = offset {
            let page = self.source.liked_page(current).await?;
            for track in page.tracks {
                self.process(track, playlist.as_deref(), run).await?;
            }
            offset = page.next_offset.filter(|next| *next > current);
        }

        if let Some(playlist_id) = playlist.as_deref() {
            self.flush(playlist_id, run).await?;
        }

        Ok(())
    }

    async fn process(
        &self,
        track: TrackRef,
        playlist: Option<&str>,
        run: &mut Run,
    ) -> Result<(), SyncError> {
        run.report.seen += 1;
        self.tick(&run.report);

        if run.processed.contains(&track.id) || !run.handled.insert(track.id.clone()) {
            run.report.skipped += 1;
            self.note(|| format!("skip processed track: {}", track));
            return Ok(());
        }

        let query = utils::search_query(&track.artist, &track.title);
        let candidates = self.target.search(&query).await?;

        let sync_match = match self.resolver.resolve(&track, &candidates) {
            Resolution::Matched(m) => m,
            Resolution::NoCandidates => {
                self.miss(track, MissReason::NoCandidates, run);
                return Ok(());
            }
            Resolution::BelowThreshold => {
                self.miss(track, MissReason::BelowThreshold, run);
                return Ok(());
            }
            Resolution::Declined { asked } => {
                self.note(|| format!("{} ambiguous candidates declined for {}", asked, track));
                self.miss(track, MissReason::Declined, run);
                return Ok(());
            }
        };

        if !run.used_targets.insert(sync_match.target.id.clone()) {
            self.note(|| format!("already on {}: {}", self.target.name(), sync_match.target));
            run.pending.insert(sync_match.source.id);
            run.report.already_present += 1;
            return Ok(());
        }

        match playlist {
            None => {
                self.target.like(&sync_match.target).await?;
                self.note(|| format!("liked on {}: {}", self.target.name(), sync_match.target));
                run.pending.insert(sync_match.source.id);
                run.report.synced += 1;
            }
            Some(playlist_id) => {
                self.note(|| format!("found match: {} -> {}", sync_match.source, sync_match.target));
                run.staged.push(sync_match);
                if run.staged.len() >= self.options.chunk_size {
                    self.flush(playlist_id, run).await?;
                }
            }
        }

        Ok(())
    }

    /// Sends staged matches to the playlist in resolution order.
    async fn flush(&self, playlist_id: &str, run: &mut Run) -> Result<(), SyncError> {
        let chunk_size = self.options.chunk_size.max(1);

        while !run.staged.is_empty() {
            let take = run.staged.len().min(chunk_size);
            let ids: Vec<String> = run.staged[..take]
                .iter()
                .map(|m| m.target.id.clone())
                .collect();

            self.target.add_to_playlist(playlist_id, &ids).await?;
            self.note(|| format!("added {} tracks to {} playlist", ids.len(), self.target.name()));

            for added in run.staged.drain(..take) {
                run.pending.insert(added.source.id);
                run.report.synced += 1;
            }
        }

        Ok(())
    }

    fn miss(&self, track: TrackRef, reason: MissReason, run: &mut Run) {
        self.note(|| format!("no match on {} for {} ({})", self.target.name(), track, reason.as_str()));
        run.missed.push(MissedTrack::new(&track, reason));
        run.report.missed += 1;
    }

    async fn checkpoint(&self, run: &Run) -> Result<(), SyncError> {
        if run.pending.is_empty() {
            self.note(|| {
                format!(
                    "no new {} tracks synced with {}",
                    self.source.name(),
                    self.target.name()
                )
            });
        } else {
            let mut processed = run.processed.clone();
            processed.extend(run.pending.iter().cloned());
            self.processed.save(&processed).await?;
            self.note(|| format!("stored {} processed ids", processed.len()));
        }

        self.missed.save(self.options.direction, &run.missed).await?;
        Ok(())
    }

    fn tick(&self, report: &SyncReport) {
        if let Some(pb) = &self.progress {
            pb.set_message(format!(
                "Processed {} liked {} tracks ({} synced, {} missed)...",
                report.seen,
                self.source.name(),
                report.synced,
                report.missed
            ));
        }
    }

    fn note(&self, message: impl FnOnce() -> String) {
        if self.options.verbose {
            let message = message();
            self.suspended(|| info!("{}", message));
        }
    }

    fn suspended(&self, f: impl FnOnce()) {
        match &self.progress {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}
