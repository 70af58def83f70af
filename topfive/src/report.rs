use std::{io::Write, time::Duration};

use log::{debug, info, warn};

use crate::{
    clients::{
        Credential, SpotifyClient,
        errors::Result,
        spotify::{DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_TIMEOUT},
    },
    fanout::fan_out,
    presenter::Presenter,
};

/// Overrides the API base path, e.g. to point at a local mock
pub const BASE_URL_ENV_VAR: &str = "SPOTIFY_API_BASE_URL";

/// Configuration for the Reporter struct
pub struct Config {
    /// Client shared by both flows
    pub spotify: SpotifyClient,
}

/// Builds a [`Config`], falling back to the environment and defaults
#[derive(Default)]
pub struct ConfigBuilder {
    credential: Option<Credential>,
    base_url: Option<String>,
    limit: Option<u32>,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Builder with nothing set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to send instead of `SPOTIFY_KEY`
    #[must_use]
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Base path instead of `SPOTIFY_API_BASE_URL` or the public API
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Items per window, 5 when unset
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Per-request timeout, 2 seconds when unset
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fill unset values from the environment or the defaults and build the client
    pub fn build(self) -> Result<Config> {
        let credential = self.credential.unwrap_or_else(Credential::from_env);
        if credential.is_empty() {
            warn!("No Spotify token configured, the API will reject the requests");
        }
        let base_url = match self.base_url {
            Some(url) => url,
            None => std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        };
        debug!("Using API base url {base_url}");

        let spotify = SpotifyClient::new(
            credential,
            &base_url,
            self.limit.unwrap_or(DEFAULT_LIMIT),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )?;
        Ok(Config { spotify })
    }
}

/// Runs the artists flow, then the tracks flow
pub struct Reporter {
    config: Config,
}

impl Reporter {
    /// Reporter using `config`
    #[must_use]
    pub fn new(config: Config) -> Self {
        Reporter { config }
    }

    /// Fetch and print both flows. Nothing is printed for a flow whose
    /// requests failed, and a failed artists flow stops the tracks flow.
    pub async fn run<W: Write>(&self, out: W) -> Result<()> {
        let mut presenter = Presenter::new(out);

        info!("Fetching top artists ...");
        let spotify = self.config.spotify.clone();
        let artists = fan_out(move |range| {
            let spotify = spotify.clone();
            async move { spotify.top_artists(range).await }
        })
        .await?;
        debug!(
            "Fetched {} all time and {} recent artists",
            artists.long_term.items.len(),
            artists.short_term.items.len()
        );
        presenter.artists(&artists)?;

        info!("Fetching top tracks ...");
        let spotify = self.config.spotify.clone();
        let tracks = fan_out(move |range| {
            let spotify = spotify.clone();
            async move { spotify.top_tracks(range).await }
        })
        .await?;
        debug!(
            "Fetched {} all time and {} recent tracks",
            tracks.long_term.items.len(),
            tracks.short_term.items.len()
        );
        presenter.tracks(&tracks)?;

        info!("Done");
        Ok(())
    }
}
