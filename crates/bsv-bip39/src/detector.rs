//! Mnemonic language detection by vocabulary voting.
//!
//! Each token votes for every vocabulary that contains it. The language
//! with the most votes wins, earlier languages in [`Language::SUPPORTED`]
//! winning ties. Chinese is special-cased: a token only votes traditional
//! when it is absent from the simplified list, and a simplified win with
//! any traditional-only vote is reported as traditional.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::language::{Language, ASCII_SPACE, IDEOGRAPHIC_SPACE};
use crate::registry::WordlistRegistry;
use crate::wordlist::Wordlist;

/// Characters a sentence of unknown language is split on.
pub const SENTENCE_SEPARATORS: [char; 2] = [ASCII_SPACE, IDEOGRAPHIC_SPACE];

/// Split a sentence of unknown language into tokens.
///
/// Splits on every [`SENTENCE_SEPARATORS`] character and drops empty tokens.
pub fn split_sentence(sentence: &str) -> Vec<&str> {
    sentence
        .split(SENTENCE_SEPARATORS)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Detects a mnemonic's language against the five BIP-39 vocabularies.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    english: Arc<Wordlist>,
    japanese: Arc<Wordlist>,
    spanish: Arc<Wordlist>,
    chinese_simplified: Arc<Wordlist>,
    chinese_traditional: Arc<Wordlist>,
}

impl LanguageDetector {
    /// Build a detector from already loaded vocabularies.
    pub fn new(
        english: Arc<Wordlist>,
        japanese: Arc<Wordlist>,
        spanish: Arc<Wordlist>,
        chinese_simplified: Arc<Wordlist>,
        chinese_traditional: Arc<Wordlist>,
    ) -> Self {
        Self {
            english,
            japanese,
            spanish,
            chinese_simplified,
            chinese_traditional,
        }
    }

    /// Load the five vocabularies concurrently through `registry`.
    pub async fn load(registry: &WordlistRegistry) -> Result<Self> {
        let (english, japanese, spanish, chinese_simplified, chinese_traditional) = tokio::try_join!(
            registry.load_by_language(Language::English),
            registry.load_by_language(Language::Japanese),
            registry.load_by_language(Language::Spanish),
            registry.load_by_language(Language::ChineseSimplified),
            registry.load_by_language(Language::ChineseTraditional),
        )?;
        Ok(Self::new(
            english,
            japanese,
            spanish,
            chinese_simplified,
            chinese_traditional,
        ))
    }

    /// Vote counts per language, in [`Language::SUPPORTED`] order.
    pub fn votes<S: AsRef<str>>(&self, tokens: &[S]) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for token in tokens {
            let token = token.as_ref();
            let simplified = self.chinese_simplified.word_exists(token).is_some();
            if self.english.word_exists(token).is_some() {
                counts[0] += 1;
            }
            if self.japanese.word_exists(token).is_some() {
                counts[1] += 1;
            }
            if self.spanish.word_exists(token).is_some() {
                counts[2] += 1;
            }
            if simplified {
                counts[3] += 1;
            }
            if !simplified && self.chinese_traditional.word_exists(token).is_some() {
                counts[4] += 1;
            }
        }
        counts
    }

    /// Detect the language of pre-split tokens.
    ///
    /// Returns [`Language::Unknown`] when no token is in any vocabulary.
    pub fn detect<S: AsRef<str>>(&self, tokens: &[S]) -> Language {
        let counts = self.votes(tokens);
        debug!(?counts, "language detection votes");

        let max = counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return Language::Unknown;
        }
        // First maximum in priority order.
        let winner = counts
            .iter()
            .position(|&count| count == max)
            .map_or(Language::Unknown, |i| Language::SUPPORTED[i]);

        if winner == Language::ChineseSimplified && counts[4] > 0 {
            return Language::ChineseTraditional;
        }
        winner
    }

    /// Split `sentence` with [`split_sentence`] and detect its language.
    pub fn detect_sentence(&self, sentence: &str) -> Language {
        self.detect(&split_sentence(sentence))
    }
}
