//! # Last.fm Integration Module
//!
//! Client for the Last.fm 2.0 API and its sync engine adapters.
//!
//! - [`auth`] - web authentication flow, run by `likesync auth lastfm`.
//! - `client` - [`LastFmClient`], request signing and error decoding.
//! - `tracks` - loved tracks, track search and `track.love`.
//! - `service` - [`LikedSource`](crate::sync::LikedSource) and
//!   [`TargetCatalog`](crate::sync::TargetCatalog) implementations.
//!
//! Last.fm has no stable track ids, so tracks are keyed by their page url.
//! Loving a track is done by artist and title. Playlists are not available
//! through the API.

pub mod auth;
mod client;
mod service;
mod tracks;

pub use client::LastFmClient;
