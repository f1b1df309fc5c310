//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API likesync needs, plus the
//! [`LikedSource`](crate::sync::LikedSource) and
//! [`TargetCatalog`](crate::sync::TargetCatalog) implementations that plug
//! Spotify into the sync engine.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow, run by `likesync auth spotify`.
//! - `client` - [`SpotifyClient`], token handling and retry policy.
//! - `library` - saved tracks, saving tracks and catalog search.
//! - `playlist` - playlist lookup, creation, listing and appending.
//! - `service` - trait implementations used by [`crate::sync::Syncer`].
//!
//! ## Identifiers
//!
//! Liked tracks read from Spotify are keyed by their track id. Search
//! results are keyed by their `spotify:track:` uri, which is what playlist
//! endpoints expect; liking converts the uri back to an id.

pub mod auth;
mod client;
mod library;
mod playlist;
mod service;

pub use client::SpotifyClient;
