//! Bounded memoization of normalization results.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use lru::LruCache;

use databrowser_abi::{MetadataRecord, ReadError};

/// Matches the bound the metadata view has always used; big enough to cover
/// flipping between a handful of files, small enough to never matter.
pub const DEFAULT_CAPACITY: usize = 10;

/// Least-recently-used memoization from file path to normalized record.
///
/// Purely a convenience to avoid re-parsing while the user flips between
/// files. Entries are never invalidated: if the file changes on disk a
/// cached record can be stale, and that is accepted. A lookup only ever
/// returns a record cached under the same path.
pub struct ResultCache {
    entries: LruCache<PathBuf, MetadataRecord>,
}

impl ResultCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Cached record for `path`, or run `compute` and remember the result.
    ///
    /// A hit is marked most-recently-used. A miss stores the computed record,
    /// evicting the least-recently-used entry at capacity. A failed compute
    /// is propagated and NOT cached, so the next lookup retries.
    pub fn get_or_compute<F>(&mut self, path: &Path, compute: F) -> Result<MetadataRecord, ReadError>
    where
        F: FnOnce(&Path) -> Result<MetadataRecord, ReadError>,
    {
        if let Some(rec) = self.entries.get(path) {
            return Ok(rec.clone());
        }
        let rec = compute(path)?;
        self.entries.put(path.to_path_buf(), rec.clone());
        Ok(rec)
    }

    /// Whether `path` is cached, without touching recency.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.peek(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).expect("default capacity is nonzero"))
    }
}
