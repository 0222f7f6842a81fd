//! Unified error type for country lookups

use serde::Serialize;
use thiserror::Error;

/// Error returned by [`CountrySource::search`](crate::CountrySource::search).
///
/// Both variants are logged where they originate, so callers only need to
/// decide what to show the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ClientError {
    /// The service answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    HttpStatus {
        /// Status code of the response.
        status: u16,
    },

    /// The request never produced a usable response (connection failure,
    /// timeout, unreadable body, malformed JSON).
    #[error("An error occurred while fetching the data: {detail}")]
    Fetch {
        /// Underlying error description.
        detail: String,
    },
}

impl ClientError {
    pub(crate) fn fetch(detail: impl ToString) -> Self {
        Self::Fetch {
            detail: detail.to_string(),
        }
    }

    /// HTTP status carried by the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            Self::Fetch { .. } => None,
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
