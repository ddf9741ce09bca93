//! Error types for word-list loading and lookup.

use crate::language::Language;

/// Unified error type for BIP-39 word-list operations.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    /// The registry was built without a [`WordlistSource`](crate::WordlistSource).
    #[error("wordlist source is not configured, impossible to fetch word list")]
    MissingSource,

    /// The language has no canonical word-list name.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(Language),

    /// The source does not know a word list by this name.
    #[error("unknown word list: {0}")]
    UnknownWordlist(String),

    /// The source failed to produce the named word list.
    #[error("failed to load word list {name}: {reason}")]
    SourceLoad {
        /// Canonical name that was requested.
        name: String,
        /// Human-readable failure description from the source.
        reason: String,
    },

    /// Filesystem or runtime I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Index outside `[0, count)`.
    #[error("index {index} out of range for word list of {count} words")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of words in the vocabulary.
        count: usize,
    },

    /// A word is not part of the active vocabulary.
    #[error("word {0} is not in the wordlist for this language, cannot rebuild entropy")]
    WordNotFound(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WordlistError>;
