//! Topfive - Print your top Spotify artists and tracks
//!
//! This library fetches the current user's top artists and tracks for two time
//! windows ("all time" and "last four weeks") concurrently and renders them as
//! ranked lists.

/// Client modules for interacting with the Spotify Web API
pub mod clients;
/// Concurrent fetch of both time windows
pub mod fanout;
/// Console rendering of ranked lists
pub mod presenter;
/// Configuration and the driver running both flows
pub mod report;
