//! Per-file cache of load results, invalidated by content hash.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use xxhash_rust::xxh3::xxh3_64;

use crate::file_system::AbsoluteFsPath;

struct Entry<T> {
    content_hash: u64,
    value: T,
}

/// One entry per path. Storing a result for changed contents replaces the
/// previous entry of that path.
pub struct ContentCache<T> {
    entries: Mutex<HashMap<AbsoluteFsPath, Entry<T>>>,
}

impl<T: Clone> ContentCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn content_hash(contents: &str) -> u64 {
        xxh3_64(contents.as_bytes())
    }

    /// The cached value of `path`, if it was computed from `contents`.
    pub fn get(&self, path: &AbsoluteFsPath, contents: &str) -> Option<T> {
        let hash = Self::content_hash(contents);
        self.lock()
            .get(path)
            .filter(|entry| entry.content_hash == hash)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&self, path: AbsoluteFsPath, contents: &str, value: T) {
        let content_hash = Self::content_hash(contents);
        self.lock().insert(
            path,
            Entry {
                content_hash,
                value,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<AbsoluteFsPath, Entry<T>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: Clone> Default for ContentCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
