use tabled::Table;

use crate::{
    config, info,
    management::{MissedStore, ProcessedCache},
    sync::Direction,
    types::StateTableRow,
    warning,
};

/// Shows what likesync remembers about each direction.
pub async fn info() {
    info!("Data directory: {}", config::data_dir().display());

    let mut rows = Vec::new();
    for direction in Direction::ALL {
        let processed = match ProcessedCache::for_direction(direction).load().await {
            Ok(ids) => ids.len(),
            Err(e) => {
                warning!("{}", e);
                0
            }
        };

        let report = match MissedStore::for_direction(direction).load().await {
            Ok(report) => report,
            Err(e) => {
                warning!("{}", e);
                None
            }
        };

        let (missed, last_run) = match report {
            Some(r) => (
                r.tracks.len().to_string(),
                r.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            ),
            None => ("-".to_string(), "never".to_string()),
        };

        rows.push(StateTableRow {
            direction: direction.to_string(),
            processed,
            missed,
            last_run,
        });
    }

    println!("{}", Table::new(rows));
}
