//! Get-or-load cache of word lists over a pluggable source.
//!
//! The registry is append-only: once a list is inserted it is served from
//! memory for the life of the registry. The lock guards only the lookup
//! and the insert; the source call in between runs unlocked, so two cold
//! requests for the same name may both reach the source. The later insert
//! wins, which is harmless for a deterministic source.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use tracing::{debug, warn};

use crate::detector::LanguageDetector;
use crate::error::{Result, WordlistError};
use crate::language::Language;
use crate::source::WordlistSource;
use crate::wordlist::Wordlist;

/// Cache of loaded word lists keyed by canonical name.
pub struct WordlistRegistry {
    source: Option<Arc<dyn WordlistSource>>,
    loaded: Mutex<HashMap<String, Arc<Wordlist>>>,
}

impl WordlistRegistry {
    /// Create a registry that loads cache misses from `source`.
    pub fn new(source: Arc<dyn WordlistSource>) -> Self {
        Self {
            source: Some(source),
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry with no source.
    ///
    /// Every cold load fails with [`WordlistError::MissingSource`].
    pub fn unconfigured() -> Self {
        Self {
            source: None,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// Whether a source has been configured.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Load the word list for `language`.
    ///
    /// # Returns
    /// The list, `UnsupportedLanguage` for [`Language::Unknown`], or any
    /// error from [`load_by_name`](Self::load_by_name).
    pub async fn load_by_language(&self, language: Language) -> Result<Arc<Wordlist>> {
        let name = language.wordlist_name()?;
        self.load_by_name(name).await
    }

    /// Load the word list called `name`, consulting the cache first.
    ///
    /// A cached list is returned without suspending. On a miss the source
    /// is awaited and its error, if any, is returned unchanged.
    pub async fn load_by_name(&self, name: &str) -> Result<Arc<Wordlist>> {
        if let Some(list) = self.cached(name) {
            debug!(name, "word list cache hit");
            return Ok(list);
        }

        let source = self.source.as_ref().ok_or(WordlistError::MissingSource)?;
        debug!(name, "word list cache miss, loading from source");
        let list = Arc::new(source.load(name).await?);

        let mut loaded = self.lock();
        if loaded.insert(name.to_string(), Arc::clone(&list)).is_some() {
            warn!(name, "word list loaded concurrently, replacing cached copy");
        }
        Ok(list)
    }

    /// Blocking form of [`load_by_language`](Self::load_by_language).
    ///
    /// Safe to call with or without a tokio runtime on this thread; see
    /// [`load_by_name_blocking`](Self::load_by_name_blocking).
    pub fn load_by_language_blocking(&self, language: Language) -> Result<Arc<Wordlist>> {
        block_on(self.load_by_language(language))
    }

    /// Blocking form of [`load_by_name`](Self::load_by_name).
    ///
    /// Without a runtime on this thread a temporary one is started. Inside a
    /// multi-threaded runtime the worker is parked with `block_in_place`.
    /// Inside a current-thread runtime the load runs on a helper thread with
    /// its own runtime, so a source must not depend on tasks of the caller's
    /// runtime to make progress.
    pub fn load_by_name_blocking(&self, name: &str) -> Result<Arc<Wordlist>> {
        block_on(self.load_by_name(name))
    }

    /// Return a cached list without loading.
    pub fn cached(&self, name: &str) -> Option<Arc<Wordlist>> {
        self.lock().get(name).cloned()
    }

    /// Number of cached lists.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Load all five vocabularies and build a detector over them.
    pub async fn detector(&self) -> Result<LanguageDetector> {
        LanguageDetector::load(self).await
    }

    /// Detect the language of `sentence` and load its word list.
    ///
    /// # Returns
    /// The detected list, or `UnsupportedLanguage(Unknown)` when no word of
    /// the sentence belongs to any vocabulary.
    pub async fn auto_detect(&self, sentence: &str) -> Result<Arc<Wordlist>> {
        let language = self.detector().await?.detect_sentence(sentence);
        self.load_by_language(language).await
    }

    /// Blocking form of [`auto_detect`](Self::auto_detect).
    ///
    /// Runtime handling matches [`load_by_name_blocking`](Self::load_by_name_blocking).
    pub fn auto_detect_blocking(&self, sentence: &str) -> Result<Arc<Wordlist>> {
        block_on(self.auto_detect(sentence))
    }

    // The map is insert-only, so a guard poisoned by a panicking holder
    // still sees a consistent map.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Wordlist>>> {
        self.loaded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WordlistRegistry {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl std::fmt::Debug for WordlistRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        f.debug_struct("WordlistRegistry")
            .field("has_source", &self.has_source())
            .field("loaded", &names)
            .finish()
    }
}

/// Drive `fut` to completion from synchronous code.
fn block_on<T, F>(fut: F) -> Result<T>
where
    F: Future<Output = Result<T>> + Send,
    T: Send,
{
    let Ok(handle) = Handle::try_current() else {
        let rt = Runtime::new()?;
        return rt.block_on(fut);
    };
    match handle.runtime_flavor() {
        // A current-thread runtime cannot give up its only worker, so run
        // the future on a helper thread with its own runtime.
        RuntimeFlavor::CurrentThread => std::thread::scope(|s| {
            s.spawn(move || -> Result<T> {
                let rt = Runtime::new()?;
                rt.block_on(fut)
            })
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        }),
        // Multi-threaded: park this worker instead of nesting runtimes.
        _ => tokio::task::block_in_place(|| handle.block_on(fut)),
    }
}
