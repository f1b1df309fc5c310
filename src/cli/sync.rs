use tabled::Table;

use crate::{
    cli::TerminalConfirm,
    config::{LastFmSettings, SpotifySettings},
    error,
    lastfm::LastFmClient,
    spotify::SpotifyClient,
    success,
    sync::{
        Delivery, Direction, Interaction, LikedSource, SyncError, SyncOptions, Syncer,
        TargetCatalog,
    },
    types::SyncSummaryRow,
    utils,
};

/// How a `likesync sync` invocation was asked to behave.
#[derive(Debug, Clone, Default)]
pub struct SyncFlags {
    pub non_interactive: bool,
    pub verbose: bool,
    pub like: bool,
    pub playlist: Option<String>,
}

/// Runs one sync pass in `direction` and prints its summary.
///
/// Loads the settings and cached credentials of both services, wires the
/// liked-tracks source and the target catalog for the direction, and hands
/// them to a [`Syncer`] together with a [`TerminalConfirm`] for uncertain
/// matches. A spinner reports progress while the pass runs.
///
/// # Arguments
///
/// * `direction` - which service is read from and which is written to
/// * `flags` - command-line switches, see [`sync_options`]
///
/// # Error Handling
///
/// Invalid flag combinations, missing configuration or missing credentials
/// end the program through [`crate::error!`] before any request is made. A
/// failed pass also ends the program, after its progress was checkpointed.
///
/// # Example Output
///
/// ```text
/// [✓] Sync lastfm-to-spotify finished.
/// +-------------------+------+---------+--------+-----------------+--------+
/// | direction         | seen | skipped | synced | already_present | missed |
/// +-------------------+------+---------+--------+-----------------+--------+
/// | lastfm-to-spotify | 120  | 100     | 17     | 1               | 2      |
/// +-------------------+------+---------+--------+-----------------+--------+
/// ```
pub async fn sync(direction: Direction, flags: SyncFlags) {
    let options = match sync_options(direction, &flags) {
        Ok(options) => options,
        Err(e) => error!("{}", e),
    };

    let spotify_settings = match SpotifySettings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    };
    let lastfm_settings = match LastFmSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    };

    let spotify = match SpotifyClient::from_cache(spotify_settings).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };
    let lastfm = match LastFmClient::from_cache(lastfm_settings).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let (source, target): (&dyn LikedSource, &dyn TargetCatalog) = match direction {
        Direction::SpotifyToLastfm => (&spotify, &lastfm),
        Direction::LastfmToSpotify => (&lastfm, &spotify),
    };

    let pb = utils::spinner(format!("Syncing {}", direction));
    let confirm = TerminalConfirm::new(Some(pb.clone()));
    let syncer = Syncer::new(source, target, &confirm, options).with_progress(pb.clone());

    let result = syncer.sync_likes().await;
    pb.finish_and_clear();

    match result {
        Ok(report) => {
            success!("Sync {} finished.", direction);
            let table = Table::new(vec![SyncSummaryRow {
                direction: direction.to_string(),
                seen: report.seen,
                skipped: report.skipped,
                synced: report.synced,
                already_present: report.already_present,
                missed: report.missed,
            }]);
            println!("{}", table);
        }
        Err(e) => error!("Sync {} failed: {}", direction, e),
    }
}

/// Turns command-line switches into [`SyncOptions`].
///
/// `--like` and `--playlist` override the direction's default delivery. A
/// playlist is rejected when the target service has none.
pub fn sync_options(direction: Direction, flags: &SyncFlags) -> Result<SyncOptions, SyncError> {
    if flags.playlist.is_some() && !direction.supports_playlists() {
        return Err(SyncError::Unsupported {
            service: direction.target_service(),
            operation: "playlists",
        });
    }

    let mut options = SyncOptions::new(direction);
    options.verbose = flags.verbose;

    if flags.non_interactive {
        options.interaction = Interaction::NonInteractive;
    }

    if flags.like {
        options.delivery = Delivery::Like;
    } else if let Some(name) = &flags.playlist {
        options.delivery = Delivery::Playlist { name: name.clone() };
    }

    Ok(options)
}
