mod auth;
mod error;
mod missed;
mod processed;
mod session;

pub use auth::TokenManager;
pub use error::StorageError;
pub use missed::MISSED_FORMAT_VERSION;
pub use missed::MissReason;
pub use missed::MissedReport;
pub use missed::MissedStore;
pub use missed::MissedTrack;
pub use processed::ProcessedCache;
pub use session::SessionManager;
