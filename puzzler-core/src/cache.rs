//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use crate::key::PuzzleKey;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based cache for puzzle inputs
///
/// Layout: `{dir}/{year}-day-{day}-puzzle-input.txt`. Entries are written once
/// and never refreshed or evicted.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a key, e.g. `2024-day-3-puzzle-input.txt`
    pub fn file_name(key: PuzzleKey) -> String {
        format!("{}-day-{}-puzzle-input.txt", key.year, key.day)
    }

    /// Get the cache path for a key
    pub fn cache_path(&self, key: PuzzleKey) -> PathBuf {
        self.dir.join(Self::file_name(key))
    }

    /// Check if input is cached
    pub fn contains(&self, key: PuzzleKey) -> bool {
        self.cache_path(key).is_file()
    }

    /// Get cached input or None if not cached
    ///
    /// Content is returned verbatim, but it must be UTF-8: a file that is not
    /// fails with [`CacheError::Io`] (kind `InvalidData`) rather than being
    /// treated as missing and refetched.
    pub fn get(&self, key: PuzzleKey) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }

    /// Store input in cache
    pub fn put(&self, key: PuzzleKey, input: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|source| CacheError::DirCreation {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.cache_path(key);
        fs::write(&path, input).map_err(|source| CacheError::Io { path, source })
    }
}
