#![deny(missing_docs)]

//! # bsv-bip39-http
//!
//! HTTP [`WordlistSource`](bsv_bip39::WordlistSource) that fetches raw
//! one-word-per-line BIP-39 word lists, by default from the upstream
//! `bitcoin/bips` repository.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use bsv_bip39::{Language, WordlistRegistry};
//! use bsv_bip39_http::{HttpSourceConfig, HttpWordlistSource};
//!
//! # async fn example() -> Result<(), bsv_bip39::WordlistError> {
//! let source = HttpWordlistSource::new(HttpSourceConfig::default());
//! let registry = WordlistRegistry::new(Arc::new(source));
//!
//! let english = registry.load_by_language(Language::English).await?;
//! assert_eq!(english.word_count(), 2048);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::HttpWordlistSource;
pub use error::HttpSourceError;
pub use types::HttpSourceConfig;
