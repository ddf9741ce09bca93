//! Immutable BIP-39 vocabulary with bidirectional index/word lookup.
//!
//! A [`Wordlist`] holds the words of one language in canonical order. The
//! position of a word is the 11-bit value it encodes in a mnemonic, so the
//! order must never change once a list has been handed out.

use std::collections::HashMap;
use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, WordlistError};

/// Normalize a word or sentence to the BIP-39 comparison form (NFKD).
pub fn normalize(s: &str) -> String {
    s.nfkd().collect()
}

/// An ordered, normalized word list for one language.
#[derive(Debug, Clone)]
pub struct Wordlist {
    name: String,
    space: char,
    words: Vec<String>,
    /// Normalized word -> first position in `words`.
    positions: HashMap<String, usize>,
}

impl Wordlist {
    /// Build a word list from raw words.
    ///
    /// Every word is normalized before storage.
    ///
    /// # Arguments
    /// * `name` - Canonical name (e.g. `english`).
    /// * `space` - Separator used to join words into a sentence.
    /// * `words` - Words in canonical order.
    pub fn new<I, S>(name: impl Into<String>, space: char, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| normalize(w.as_ref())).collect();
        let mut positions = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            positions.entry(word.clone()).or_insert(i);
        }
        Self {
            name: name.into(),
            space,
            words,
            positions,
        }
    }

    /// Build a word list from one-word-per-line text.
    ///
    /// Lines are trimmed and blank lines skipped; a leading byte-order
    /// mark is ignored.
    pub fn parse(name: impl Into<String>, space: char, raw: &str) -> Self {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let words = raw.lines().map(str::trim).filter(|line| !line.is_empty());
        Self::new(name, space, words)
    }

    /// Canonical name of this list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Separator character used by [`sentence_from_indices`](Self::sentence_from_indices)
    /// and [`split`](Self::split).
    pub fn space(&self) -> char {
        self.space
    }

    /// Number of words in the vocabulary.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// All words in canonical order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Look up a word, returning its position if present.
    ///
    /// The input is normalized before comparison, so composed and
    /// decomposed spellings of the same word both match.
    pub fn word_exists(&self, word: &str) -> Option<usize> {
        self.positions.get(normalize(word).as_str()).copied()
    }

    /// Word at `index`.
    ///
    /// # Returns
    /// The word, or `IndexOutOfRange` outside `[0, word_count)`.
    pub fn word_at(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(WordlistError::IndexOutOfRange {
                index,
                count: self.words.len(),
            })
    }

    /// Words at each of `indices`, in order.
    pub fn words_at(&self, indices: &[usize]) -> Result<Vec<&str>> {
        indices.iter().map(|&i| self.word_at(i)).collect()
    }

    /// Join the words at `indices` with this list's separator.
    pub fn sentence_from_indices(&self, indices: &[usize]) -> Result<String> {
        let words = self.words_at(indices)?;
        let mut buf = [0u8; 4];
        let sep: &str = self.space.encode_utf8(&mut buf);
        Ok(words.join(sep))
    }

    /// Split a sentence on this list's separator.
    ///
    /// Empty tokens produced by leading, trailing, or repeated separators
    /// are dropped. Tokens are returned as written, without normalization.
    pub fn split<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence
            .split(self.space)
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Map words back to their indices.
    ///
    /// Stops at the first word missing from the vocabulary and reports it;
    /// no partial result is returned.
    pub fn indices_from_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<usize>> {
        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                self.word_exists(word)
                    .ok_or_else(|| WordlistError::WordNotFound(word.to_string()))
            })
            .collect()
    }
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Wordlist {
        Wordlist::new("english", ' ', ["abandon", "ability", "able", "about"])
    }

    #[test]
    fn test_word_exists() {
        let list = sample();
        assert_eq!(list.word_exists("able"), Some(2));
        assert_eq!(list.word_exists("zoo"), None);
        assert_eq!(list.word_exists(""), None);
    }

    #[test]
    fn test_word_at_bounds() {
        let list = sample();
        assert_eq!(list.word_at(0).unwrap(), "abandon");
        assert_eq!(list.word_at(3).unwrap(), "about");
        assert!(matches!(
            list.word_at(4),
            Err(WordlistError::IndexOutOfRange { index: 4, count: 4 })
        ));
        assert!(list.word_at(usize::MAX).is_err());
    }

    #[test]
    fn test_normalizes_composed_input() {
        // "ábaco" written with a precomposed U+00E1.
        let list = Wordlist::new("spanish", ' ', ["a\u{301}baco", "abdomen"]);
        assert_eq!(list.word_exists("\u{e1}baco"), Some(0));
        assert_eq!(list.word_exists("a\u{301}baco"), Some(0));
        assert_eq!(list.word_at(0).unwrap(), "a\u{301}baco");
    }

    #[test]
    fn test_stored_words_are_normalized() {
        let list = Wordlist::new("spanish", ' ', ["\u{e1}baco"]);
        assert_eq!(list.words()[0], "a\u{301}baco");
    }

    #[test]
    fn test_duplicates_resolve_to_first_position() {
        let list = Wordlist::new("dup", ' ', ["one", "two", "one"]);
        assert_eq!(list.word_exists("one"), Some(0));
        assert_eq!(list.word_count(), 3);
    }

    #[test]
    fn test_parse_raw_text() {
        let raw = "\u{feff}abandon\r\nability\n\n  able  \nabout\n";
        let list = Wordlist::parse("english", ' ', raw);
        assert_eq!(list.words(), &["abandon", "ability", "able", "about"]);
        assert_eq!(list.name(), "english");
        assert_eq!(list.to_string(), "english");
    }

    #[test]
    fn test_sentence_and_split() {
        let list = sample();
        let sentence = list.sentence_from_indices(&[3, 0, 0, 2]).unwrap();
        assert_eq!(sentence, "about abandon abandon able");
        assert_eq!(list.split(&sentence), vec!["about", "abandon", "abandon", "able"]);
    }

    #[test]
    fn test_split_drops_empty_tokens() {
        let list = sample();
        assert_eq!(list.split("  able   about "), vec!["able", "about"]);
        assert!(list.split("").is_empty());
        assert!(list.split("   ").is_empty());
    }

    #[test]
    fn test_ideographic_separator() {
        let list = Wordlist::new("japanese", '\u{3000}', ["あいこくしん", "あいさつ"]);
        let sentence = list.sentence_from_indices(&[1, 0]).unwrap();
        assert_eq!(sentence, "あいさつ\u{3000}あいこくしん");
        // ASCII space is not a separator for this list.
        assert_eq!(list.split("あいさつ あいこくしん").len(), 1);
    }

    #[test]
    fn test_words_at_fails_on_any_invalid_index() {
        let list = sample();
        assert!(list.words_at(&[0, 1, 99]).is_err());
        assert_eq!(list.words_at(&[]).unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_indices_from_words_fail_fast() {
        let list = sample();
        assert_eq!(list.indices_from_words(&["able", "about"]).unwrap(), vec![2, 3]);
        let err = list
            .indices_from_words(&["able", "not_a_word", "also_missing"])
            .unwrap_err();
        match err {
            WordlistError::WordNotFound(word) => assert_eq!(word, "not_a_word"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
