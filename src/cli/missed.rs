use tabled::Table;

use crate::{
    error, info,
    management::MissedStore,
    sync::Direction,
    types::MissedTableRow,
};

/// Lists the tracks the last run in `direction` could not match.
pub async fn missed(direction: Direction) {
    let report = match MissedStore::for_direction(direction).load().await {
        Ok(report) => report,
        Err(e) => error!("Failed to load missed tracks: {}", e),
    };

    let Some(report) = report else {
        info!("No run recorded for {} yet.", direction);
        return;
    };

    if report.tracks.is_empty() {
        info!(
            "Nothing missed in the run of {}.",
            report.recorded_at.format("%Y-%m-%d %H:%M")
        );
        return;
    }

    info!(
        "{} tracks missed in the run of {}:",
        report.tracks.len(),
        report.recorded_at.format("%Y-%m-%d %H:%M")
    );

    let rows: Vec<MissedTableRow> = report
        .tracks
        .into_iter()
        .map(|t| MissedTableRow {
            artist: t.artist,
            title: t.title,
            reason: t.reason.as_str().to_string(),
            id: t.id,
        })
        .collect();

    println!("{}", Table::new(rows));
}
