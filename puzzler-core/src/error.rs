//! Error types for puzzle input resolution

use crate::clock::ReleaseWindow;
use crate::key::PuzzleKey;
use puzzler_http::AocError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a puzzle input could not be produced
///
/// Each variant corresponds to one step of the resolution policy, in order.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The key is past the local release window; nothing was requested
    #[error("{key} has not been released yet (latest unlocked: {window}); refusing to fetch")]
    UnreleasedPuzzle {
        key: PuzzleKey,
        window: ReleaseWindow,
    },

    /// No session token is configured, so fetching is disabled
    #[error("no session token configured; cannot fetch {key}")]
    CredentialMissing { key: PuzzleKey },

    /// The site refused the request because the puzzle is not unlocked yet
    #[error("the site has not released {key} yet; wait until it unlocks")]
    NotYetAvailable { key: PuzzleKey },

    /// Transport or HTTP failure while fetching
    #[error("failed to fetch {key}: {source}")]
    NetworkFailure {
        key: PuzzleKey,
        #[source]
        source: AocError,
    },

    /// Cache read or write failed
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Reading or writing a cache file failed
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache directory creation failed
    #[error("Failed to create cache directory {}: {source}", path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Credential file errors
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Reading or writing the session file failed
    #[error("IO error on session file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refused to store a blank token
    #[error("Session token is empty")]
    Empty,
}
