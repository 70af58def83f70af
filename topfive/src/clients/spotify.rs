use std::{fmt, sync::Arc, time::Duration};

use log::debug;
use reqwest::{
    StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use url::Url;

use crate::clients::{
    entities::{ArtistResult, TimeRange, TrackResult, decode},
    errors::{Error, Result},
};

/// Base path of the "top items" endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1/me/top";
/// Number of items requested per time window
pub const DEFAULT_LIMIT: u32 = 5;
/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
/// Largest page the API accepts
pub const MAX_LIMIT: u32 = 50;
/// Environment variable holding the bearer token
pub const TOKEN_ENV_VAR: &str = "SPOTIFY_KEY";

/// Endpoint families under the base path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/artists`
    Artists,
    /// `/tracks`
    Tracks,
}

impl Endpoint {
    /// Path segment appended to the base URL
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Artists => "artists",
            Endpoint::Tracks => "tracks",
        }
    }
}

/// Opaque bearer token. Never printed.
#[derive(Clone, Default)]
pub struct Credential(String);

impl Credential {
    /// Wrap a pre-issued token
    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    /// Read the token from `SPOTIFY_KEY`. A missing variable yields an empty
    /// token, which the API rejects on the first request.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) => Credential(token),
            Err(e) => {
                debug!("{TOKEN_ENV_VAR} is not usable: {e}");
                Credential::default()
            }
        }
    }

    /// True when no token was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Client for the current user's top artists and tracks.
///
/// Cloning is cheap: the HTTP connection pool and the credential are shared.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    credential: Arc<Credential>,
    limit: u32,
}

impl SpotifyClient {
    /// Build a client sending `credential` to `base_url`, asking for `limit`
    /// items per window and giving up on a request after `timeout`
    pub fn new(
        credential: Credential,
        base_url: &str,
        limit: u32,
        timeout: Duration,
    ) -> Result<Self> {
        Url::parse(base_url)?;
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(Error::Configuration(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {limit}"
            )));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(SpotifyClient {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            credential: Arc::new(credential),
            limit,
        })
    }

    /// Full URL for one endpoint and time window, e.g.
    /// `.../me/top/artists?time_range=long_term&limit=5`
    pub fn request_url(&self, endpoint: Endpoint, range: TimeRange) -> Result<Url> {
        let limit = self.limit.to_string();
        let url = Url::parse_with_params(
            &format!("{}/{}", self.base_url, endpoint.as_str()),
            &[("time_range", range.as_str()), ("limit", limit.as_str())],
        )?;
        Ok(url)
    }

    /// Issue the authenticated GET and return the raw body of a 200 response
    pub async fn fetch(&self, endpoint: Endpoint, range: TimeRange) -> Result<Vec<u8>> {
        let url = self.request_url(endpoint, range)?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .bearer_auth(self.credential.secret())
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .send()
            .await?;

        let status = response.status();
        debug!("{} {range} responded with {status}", endpoint.as_str());
        if status != StatusCode::OK {
            return Err(Error::Api { status });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Top artists for one window
    pub async fn top_artists(&self, range: TimeRange) -> Result<ArtistResult> {
        let body = self.fetch(Endpoint::Artists, range).await?;
        decode(&body)
    }

    /// Top tracks for one window
    pub async fn top_tracks(&self, range: TimeRange) -> Result<TrackResult> {
        let body = self.fetch(Endpoint::Tracks, range).await?;
        decode(&body)
    }
}
