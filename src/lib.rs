//! Liked-tracks synchronization between Last.fm and Spotify
//!
//! This library keeps the "liked" tracks of a Last.fm account and a Spotify
//! account in step. The two services share no identifiers, so tracks are
//! matched by fuzzy comparison of artist and title, with a human asked to
//! settle the uncertain cases. Every run is an idempotent pass: tracks that
//! were synchronized before are remembered per direction and never touched
//! again.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local auth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `lastfm` - Last.fm Web API client and adapters
//! - `management` - Local persistence (processed ids, missed tracks, tokens)
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client and adapters
//! - `sync` - Matching and synchronization core
//! - `types` - Wire types and table rows
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use likesync::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), config::ConfigError> {
//!     config::load_env().await?;
//!     cli::info().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod lastfm;
pub mod management;
pub mod server;
pub mod spotify;
pub mod sync;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message.
///
/// # Example
///
/// ```
/// info!("Starting synchronization...");
/// info!("Found {} loved tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// success!("Synced {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only the command-line layer uses
/// it; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice.
///
/// # Example
///
/// ```
/// warning!("Playlist not found, creating it");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
