//! Cache-first puzzle input resolution

use crate::cache::FileCache;
use crate::clock::{Clock, current_release_window};
use crate::credential::CredentialProvider;
use crate::error::ResolveError;
use crate::key::PuzzleKey;
use puzzler_http::{AocClient, AocError, is_rejection};
use tracing::{info, warn};

/// Performs the single GET for a puzzle's input
///
/// Implementations return the raw response body; interpreting it is the
/// resolver's job.
pub trait InputFetcher {
    fn fetch_input(&self, key: PuzzleKey, session: &str) -> Result<String, AocError>;
}

impl InputFetcher for AocClient {
    fn fetch_input(&self, key: PuzzleKey, session: &str) -> Result<String, AocError> {
        self.get_input(key.year, key.day, session)
    }
}

impl<F: InputFetcher + ?Sized> InputFetcher for &F {
    fn fetch_input(&self, key: PuzzleKey, session: &str) -> Result<String, AocError> {
        (**self).fetch_input(key, session)
    }
}

/// Resolves puzzle inputs from the local cache, fetching at most once
pub struct PuzzleInputResolver<C, K, F> {
    cache: FileCache,
    credentials: C,
    clock: K,
    fetcher: F,
}

impl<C, K, F> PuzzleInputResolver<C, K, F>
where
    C: CredentialProvider,
    K: Clock,
    F: InputFetcher,
{
    pub fn new(cache: FileCache, credentials: C, clock: K, fetcher: F) -> Self {
        Self {
            cache,
            credentials,
            clock,
            fetcher,
        }
    }

    pub fn cache(&self) -> &FileCache {
        &self.cache
    }

    /// Return the input for `key`
    ///
    /// Steps, in order, each ending resolution:
    ///
    /// 1. cached file exists: return it, no fetch
    /// 2. key past the release window: [`ResolveError::UnreleasedPuzzle`]
    /// 3. no session token: [`ResolveError::CredentialMissing`]
    /// 4. fetch; a rejection body is [`ResolveError::NotYetAvailable`],
    ///    anything else is written to the cache and returned
    ///
    /// Only a successful fetch writes to the cache. Nothing is retried.
    pub fn resolve(&self, key: PuzzleKey) -> Result<String, ResolveError> {
        if let Some(cached) = self.cache.get(key)? {
            info!(%key, "input returned from saved file");
            return Ok(cached);
        }

        let window = current_release_window(&self.clock);
        if !window.permits(key) {
            warn!(%key, %window, "refusing to fetch an unreleased puzzle");
            return Err(ResolveError::UnreleasedPuzzle { key, window });
        }

        let Some(session) = self.credentials.session() else {
            warn!(%key, "no session token configured; fetching disabled");
            return Err(ResolveError::CredentialMissing { key });
        };

        info!(%key, "input not cached; fetching from the site");
        let body = match self.fetcher.fetch_input(key, session.expose()) {
            Ok(body) => body,
            Err(AocError::NotReleased) => return Err(self.not_yet_available(key)),
            Err(source) => {
                warn!(%key, error = %source, "fetch failed");
                return Err(ResolveError::NetworkFailure { key, source });
            }
        };

        if is_rejection(&body) {
            return Err(self.not_yet_available(key));
        }

        self.cache.put(key, &body)?;
        info!(%key, path = %self.cache.cache_path(key).display(), "input returned from a fetch request");
        Ok(body)
    }

    fn not_yet_available(&self, key: PuzzleKey) -> ResolveError {
        warn!(%key, "the site has not released this puzzle yet");
        ResolveError::NotYetAvailable { key }
    }
}
