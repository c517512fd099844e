//! Errors raised at the provider client boundary.

use thiserror::Error;

/// Why a single page request produced no usable data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Body did not match the provider's response schema
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}
