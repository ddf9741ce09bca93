//! Supported BIP-39 languages and their canonical word-list names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordlistError;

/// Separator joining words of a Japanese mnemonic (ideographic space).
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Separator joining words of every other mnemonic.
pub const ASCII_SPACE: char = ' ';

/// A word-list language.
///
/// `Unknown` is the detection sentinel and has no word list of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English.
    English,
    /// Japanese.
    Japanese,
    /// Spanish.
    Spanish,
    /// Chinese, simplified script.
    ChineseSimplified,
    /// Chinese, traditional script.
    ChineseTraditional,
    /// No language could be determined.
    Unknown,
}

impl Language {
    /// All languages that have a word list, in detection priority order.
    ///
    /// Ties during detection resolve towards the earlier entry.
    pub const SUPPORTED: [Language; 5] = [
        Language::English,
        Language::Japanese,
        Language::Spanish,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    /// Canonical lowercase name, or `None` for [`Language::Unknown`].
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::English => Some("english"),
            Self::Japanese => Some("japanese"),
            Self::Spanish => Some("spanish"),
            Self::ChineseSimplified => Some("chinese_simplified"),
            Self::ChineseTraditional => Some("chinese_traditional"),
            Self::Unknown => None,
        }
    }

    /// Canonical word-list name used to query a source.
    ///
    /// # Returns
    /// The name, or `UnsupportedLanguage` for [`Language::Unknown`].
    pub fn wordlist_name(&self) -> Result<&'static str, WordlistError> {
        self.name().ok_or(WordlistError::UnsupportedLanguage(*self))
    }

    /// Separator used when joining this language's words into a sentence.
    pub fn separator(&self) -> char {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => ASCII_SPACE,
        }
    }
}

/// Separator for a word list identified by its canonical name.
///
/// Sources call this when building a [`Wordlist`](crate::Wordlist) from raw text.
pub fn separator_for(name: &str) -> char {
    name.parse::<Language>()
        .map(|lang| lang.separator())
        .unwrap_or(ASCII_SPACE)
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or("unknown"))
    }
}

impl FromStr for Language {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::SUPPORTED
            .into_iter()
            .find(|lang| lang.name() == Some(s))
            .ok_or_else(|| WordlistError::UnknownWordlist(s.to_string()))
    }
}
