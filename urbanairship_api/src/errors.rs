//! Error types for the API client.

use reqwest::StatusCode;

use crate::types::ErrorResponse;

/// Boxed cause of a transport-level failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when building or sending requests to UrbanAirship.
///
/// Every call yields either a decoded response or exactly one of these.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client could not be constructed (bad base URL, missing credentials).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A required call parameter was missing.
    #[error("{0}")]
    Validation(&'static str),

    /// The request never produced a response (connection failure, timeout,
    /// cancellation, or the body could not be read).
    #[error("{0}")]
    Transport(#[source] BoxError),

    /// The API returned 401.
    #[error("authentication failed")]
    Unauthorized,

    /// The API returned 404.
    #[error("resource not found")]
    NotFound,

    /// The API returned 400 with a structured error body.
    #[error(transparent)]
    Api(#[from] ErrorResponse),

    /// The API returned a status this client does not classify further.
    /// `status_line` is the code plus the reason phrase the server sent.
    #[error("client: {status_line}")]
    UnexpectedStatus {
        status: StatusCode,
        status_line: String,
    },

    /// A response body was not the JSON shape expected for it.
    #[error("error decoding JSON body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized.
    #[error("error encoding JSON body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport(err.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::transport(e)
    }
}
