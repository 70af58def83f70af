use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while fetching or printing top items
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure or request timeout
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any response status other than 200
    #[error("resp had non 200 status code: {status}")]
    Api {
        /// Status returned by the API
        status: StatusCode,
    },

    /// Body is not JSON or does not have the expected shape
    #[error("Failed to decode response body, error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid base URL or limit
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A fetch task panicked or was cancelled
    #[error("Request task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Both concurrent requests of a flow failed. Neither error is dropped.
    #[error("both requests failed; long_term: {long_term}; short_term: {short_term}")]
    BothRangesFailed {
        /// Failure of the all-time request
        long_term: Box<Error>,
        /// Failure of the last-four-weeks request
        short_term: Box<Error>,
    },

    /// Writing the ranked lists failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Configuration(format!("invalid API url: {err}"))
    }
}

impl Error {
    /// HTTP status carried by an API error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status } => Some(*status),
            _ => None,
        }
    }
}
