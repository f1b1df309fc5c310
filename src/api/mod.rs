//! # API Module
//!
//! HTTP handlers for the short-lived local server that receives OAuth
//! callbacks while `likesync auth` runs.
//!
//! ## Endpoints
//!
//! - [`callback`] - Spotify redirect target, captures the authorization code
//!   for the PKCE exchange.
//! - [`lastfm_callback`] - Last.fm redirect target, captures the auth token
//!   that is traded for a session key.
//! - [`health`] - Returns application status and version.
//!
//! Handlers only record what they receive in the shared
//! [`crate::server::PendingAuth`]; the token exchanges happen in the auth
//! flows of [`crate::spotify`] and [`crate::lastfm`].

mod callback;
mod health;

pub use callback::callback;
pub use callback::lastfm_callback;
pub use health::health;
