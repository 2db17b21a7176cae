//! Lexicon providers.
//!
//! The scanners never own the lexicon. They ask a [`LexiconProvider`] for a
//! snapshot once per operation and read it without mutating it. Providers
//! decide how fresh that snapshot is:
//!
//! - [`StaticLexiconProvider`] - a fixed in-memory lexicon
//! - [`FileLexiconProvider`] - re-reads a file on every request
//! - [`CachedLexiconProvider`] - keeps another provider's snapshot until
//!   [`CachedLexiconProvider::invalidate`] is called

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::error::Result;
use crate::lexicon::Lexicon;

/// Source of canonical banned words.
pub trait LexiconProvider: Send + Sync {
    /// Fetch the current snapshot of canonical words.
    fn canonical_words(&self) -> Result<Arc<Lexicon>>;

    /// Get the name of this provider (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<P: LexiconProvider + ?Sized> LexiconProvider for Arc<P> {
    fn canonical_words(&self) -> Result<Arc<Lexicon>> {
        (**self).canonical_words()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<P: LexiconProvider + ?Sized> LexiconProvider for Box<P> {
    fn canonical_words(&self) -> Result<Arc<Lexicon>> {
        (**self).canonical_words()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A provider that always returns the same lexicon.
#[derive(Clone, Debug, Default)]
pub struct StaticLexiconProvider {
    lexicon: Arc<Lexicon>,
}

impl StaticLexiconProvider {
    /// Wrap a lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        StaticLexiconProvider {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Build a provider straight from a list of words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(Lexicon::from_words(words)?))
    }
}

impl From<Lexicon> for StaticLexiconProvider {
    fn from(lexicon: Lexicon) -> Self {
        Self::new(lexicon)
    }
}

impl LexiconProvider for StaticLexiconProvider {
    fn canonical_words(&self) -> Result<Arc<Lexicon>> {
        Ok(Arc::clone(&self.lexicon))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// A provider backed by a lexicon file that is read on every request.
#[derive(Clone, Debug)]
pub struct FileLexiconProvider {
    path: PathBuf,
}

impl FileLexiconProvider {
    /// Create a provider for the given file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileLexiconProvider {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LexiconProvider for FileLexiconProvider {
    fn canonical_words(&self) -> Result<Arc<Lexicon>> {
        Ok(Arc::new(Lexicon::load_from_file(&self.path)?))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Caches another provider's snapshot until explicitly invalidated.
pub struct CachedLexiconProvider<P> {
    inner: P,
    cache: RwLock<Option<Arc<Lexicon>>>,
}

impl<P: LexiconProvider> CachedLexiconProvider<P> {
    /// Wrap a provider. Nothing is fetched until the first request.
    pub fn new(inner: P) -> Self {
        CachedLexiconProvider {
            inner,
            cache: RwLock::new(None),
        }
    }

    /// Drop the cached snapshot; the next request fetches a fresh one.
    ///
    /// Snapshots already handed out stay valid and unchanged.
    pub fn invalidate(&self) {
        debug!("Invalidating cached lexicon from '{}'", self.inner.name());
        *self.cache.write() = None;
    }

    /// Check if a snapshot is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.read().is_some()
    }

    /// Get the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: LexiconProvider> LexiconProvider for CachedLexiconProvider<P> {
    fn canonical_words(&self) -> Result<Arc<Lexicon>> {
        if let Some(lexicon) = self.cache.read().as_ref() {
            return Ok(Arc::clone(lexicon));
        }

        let mut cache = self.cache.write();
        // Another thread may have filled the cache while we waited.
        if let Some(lexicon) = cache.as_ref() {
            return Ok(Arc::clone(lexicon));
        }

        let lexicon = self.inner.canonical_words()?;
        *cache = Some(Arc::clone(&lexicon));
        Ok(lexicon)
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl LexiconProvider for CountingProvider {
        fn canonical_words(&self) -> Result<Arc<Lexicon>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Lexicon::from_words([format!("слово{n}")])?))
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_static_provider_shares_snapshot() {
        let provider = StaticLexiconProvider::from_words(["пример"]).unwrap();
        let a = provider.canonical_words().unwrap();
        let b = provider.canonical_words().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(provider.name(), "static");
    }

    #[test]
    fn test_cached_provider_fetches_once_until_invalidated() {
        let provider = CachedLexiconProvider::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        assert!(!provider.is_cached());

        let first = provider.canonical_words().unwrap();
        let again = provider.canonical_words().unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(provider.inner().calls.load(Ordering::SeqCst), 1);

        provider.invalidate();
        assert!(!provider.is_cached());

        let fresh = provider.canonical_words().unwrap();
        assert!(fresh.contains("слово1"));
        // The old snapshot is untouched.
        assert!(first.contains("слово0"));
        assert_eq!(provider.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_file_provider_missing_file() {
        let provider = FileLexiconProvider::new("/nonexistent/antimat/words.txt");
        assert!(provider.canonical_words().is_err());
    }
}
