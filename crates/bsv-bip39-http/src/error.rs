//! Error types for HTTP word-list fetches.

use bsv_bip39::WordlistError;

/// Errors that can occur when fetching a word list over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum HttpSourceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server returned a non-2xx response.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Response body from the server.
        message: String,
    },

    /// No word list at the requested URL (404).
    #[error("not found")]
    NotFound,

    /// The list name is not of the form `[a-z0-9_]+`.
    #[error("invalid word list name: {0}")]
    InvalidName(String),
}

impl HttpSourceError {
    /// Convert into the core error type for the list called `name`.
    pub fn into_wordlist_error(self, name: &str) -> WordlistError {
        match self {
            Self::NotFound | Self::InvalidName(_) => {
                WordlistError::UnknownWordlist(name.to_string())
            }
            other => WordlistError::SourceLoad {
                name: name.to_string(),
                reason: other.to_string(),
            },
        }
    }
}
