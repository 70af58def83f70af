/// Data entities for top artists and tracks, and the response decoder
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify Web API client
pub mod spotify;

pub use entities::TimeRange;
pub use spotify::{Credential, Endpoint, SpotifyClient};
