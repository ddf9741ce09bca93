//! Word-list sources.
//!
//! A [`WordlistSource`] turns a canonical name into a constructed
//! [`Wordlist`]. The registry owns one and calls it on a cache miss; where
//! the raw text comes from is entirely up to the implementation.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, WordlistError};
use crate::language::separator_for;
use crate::wordlist::Wordlist;

/// Whether `name` is a well-formed word-list name (`[a-z0-9_]+`).
///
/// Sources that build a path or URL from a name reject anything else so
/// the name cannot step outside the configured location.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Asynchronously produces word lists by canonical name.
///
/// Implementations must be safe to call concurrently, for the same name
/// or different names, and should return the same list for the same name
/// every time: the registry may call `load` twice for one name and keep
/// whichever result lands last.
#[async_trait]
pub trait WordlistSource: Send + Sync {
    /// Load the word list called `name` (e.g. `english`).
    async fn load(&self, name: &str) -> Result<Wordlist>;
}

/// Source backed by raw word-list text held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordlistSource {
    lists: HashMap<String, String>,
}

impl MemoryWordlistSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one-word-per-line text under `name`, replacing any previous entry.
    pub fn with_wordlist(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.lists.insert(name.into(), raw.into());
        self
    }

    /// Names this source can serve.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }
}

#[async_trait]
impl WordlistSource for MemoryWordlistSource {
    async fn load(&self, name: &str) -> Result<Wordlist> {
        let raw = self
            .lists
            .get(name)
            .ok_or_else(|| WordlistError::UnknownWordlist(name.to_string()))?;
        Ok(Wordlist::parse(name, separator_for(name), raw))
    }
}

/// Source reading `<root>/<name>.txt` from the filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryWordlistSource {
    root: PathBuf,
}

impl DirectoryWordlistSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a given list name resolves to.
    ///
    /// Only `[a-z0-9_]` names are accepted so a name can never escape `root`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if !is_valid_name(name) {
            return Err(WordlistError::UnknownWordlist(name.to_string()));
        }
        Ok(self.root.join(format!("{name}.txt")))
    }
}

#[async_trait]
impl WordlistSource for DirectoryWordlistSource {
    async fn load(&self, name: &str) -> Result<Wordlist> {
        let path = self.path_for(name)?;
        debug!(name, path = %path.display(), "reading word list");
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(WordlistError::UnknownWordlist(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Wordlist::parse(name, separator_for(name), &raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_loads_known_list() {
        let source = MemoryWordlistSource::new()
            .with_wordlist("english", "abandon\nability\nable\n")
            .with_wordlist("japanese", "あいこくしん\nあいさつ\n");

        let english = source.load("english").await.unwrap();
        assert_eq!(english.word_count(), 3);
        assert_eq!(english.space(), ' ');

        let japanese = source.load("japanese").await.unwrap();
        assert_eq!(japanese.space(), '\u{3000}');

        let mut names: Vec<&str> = source.names().collect();
        names.sort();
        assert_eq!(names, vec!["english", "japanese"]);
    }

    #[tokio::test]
    async fn test_memory_source_unknown_name() {
        let source = MemoryWordlistSource::new();
        let err = source.load("english").await.unwrap_err();
        assert!(matches!(err, WordlistError::UnknownWordlist(name) if name == "english"));
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("english"));
        assert!(is_valid_name("chinese_traditional"));
        assert!(is_valid_name("list2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("../x"));
        assert!(!is_valid_name("a/b"));
        assert!(!is_valid_name("english.txt"));
        assert!(!is_valid_name("Spanish"));
    }

    #[test]
    fn test_directory_path_rejects_traversal() {
        let source = DirectoryWordlistSource::new("/lists");
        assert_eq!(
            source.path_for("chinese_simplified").unwrap(),
            PathBuf::from("/lists/chinese_simplified.txt")
        );
        assert!(source.path_for("../etc/passwd").is_err());
        assert!(source.path_for("English").is_err());
        assert!(source.path_for("").is_err());
    }
}
