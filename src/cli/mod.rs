//! # CLI Module
//!
//! Command implementations behind the `likesync` binary. Each command wires
//! configuration, service clients and local storage together, reports
//! progress with the crate's output macros and renders results as tables.
//!
//! ## Commands
//!
//! - [`auth`] - authorize with Spotify (PKCE) or Last.fm (web auth)
//! - [`sync`] - one synchronization pass in a direction
//! - [`missed`] - tracks the last run could not match
//! - [`info`] - processed and missed counts per direction
//! - [`reset`] - forget the processed tracks of a direction
//!
//! Failures that end a command go through [`crate::error!`], which exits
//! with status 1.

mod auth;
mod confirm;
mod info;
mod missed;
mod reset;
mod sync;

pub use auth::{Service, auth};
pub use confirm::{TerminalConfirm, is_yes};
pub use info::info;
pub use missed::missed;
pub use reset::reset;
pub use sync::{SyncFlags, sync, sync_options};
