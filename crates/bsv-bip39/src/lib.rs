#![deny(missing_docs)]

//! # bsv-bip39
//!
//! BIP-39 word lists: normalized per-language vocabularies with
//! index/word lookup, a get-or-load cache over a pluggable source, and
//! heuristic language detection of mnemonic sentences.
//!
//! The entropy/checksum encoding itself lives elsewhere; this crate only
//! maps between 11-bit indices and words.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use bsv_bip39::{DirectoryWordlistSource, Language, WordlistRegistry};
//!
//! # async fn example() -> Result<(), bsv_bip39::WordlistError> {
//! let registry = WordlistRegistry::new(Arc::new(DirectoryWordlistSource::new("wordlists")));
//!
//! let english = registry.load_by_language(Language::English).await?;
//! let sentence = english.sentence_from_indices(&[0, 1, 2])?;
//! let indices = english.indices_from_words(&english.split(&sentence))?;
//! assert_eq!(indices, vec![0, 1, 2]);
//!
//! let detector = registry.detector().await?;
//! println!("{}", detector.detect_sentence(&sentence));
//! # Ok(())
//! # }
//! ```

pub mod detector;
pub mod error;
pub mod language;
pub mod registry;
pub mod source;
pub mod wordlist;

pub use detector::{split_sentence, LanguageDetector, SENTENCE_SEPARATORS};
pub use error::{Result, WordlistError};
pub use language::{separator_for, Language};
pub use registry::WordlistRegistry;
pub use source::{is_valid_name, DirectoryWordlistSource, MemoryWordlistSource, WordlistSource};
pub use wordlist::{normalize, Wordlist};
