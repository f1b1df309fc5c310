use crate::{error, management::ProcessedCache, success, sync::Direction};

/// Forgets which tracks were synchronized in `direction`, so the next run
/// considers every liked track again.
pub async fn reset(direction: Direction) {
    let cache = ProcessedCache::for_direction(direction);
    match cache.clear().await {
        Ok(()) => success!("Processed tracks for {} cleared.", direction),
        Err(e) => error!("Failed to clear {}: {}", cache.path().display(), e),
    }
}
