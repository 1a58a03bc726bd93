//! Content-addressed cache of per-file analysis results.
//!
//! Entries are keyed by path and validated by both a SHA-256 content hash
//! and the filesystem modification time; either mismatch is a miss and
//! drops the stale entry. Above capacity the least-recently-used entry is
//! evicted. The map is shared across worker threads without external
//! locking; recency is a monotonic tick, not wall time. Entries never
//! expire by age alone.

use crate::analyzer::types::FileAnalysis;
use crate::constants::MAX_CACHE_CAPACITY;
use dashmap::DashMap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

/// Content identity of a file at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFingerprint {
    /// SHA-256 of the file bytes, hex encoded.
    pub content_hash: String,
    /// Filesystem last-modified timestamp.
    pub modified: SystemTime,
}

/// Reads and fingerprints a file.
///
/// # Errors
///
/// Propagates I/O errors (file vanished between discovery and hashing,
/// permissions). Callers treat any error as a cache miss, never as fatal.
pub fn fingerprint(path: &Path) -> std::io::Result<FileFingerprint> {
    let bytes = std::fs::read(path)?;
    let modified = std::fs::metadata(path)?.modified()?;
    Ok(FileFingerprint {
        content_hash: hash_bytes(&bytes),
        modified,
    })
}

/// SHA-256 over raw bytes, hex encoded.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Observability snapshot of the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current entry count.
    pub size: usize,
    /// Clamped capacity.
    pub capacity: usize,
    /// Whether caching is active.
    pub enabled: bool,
    /// Lookup hits.
    pub hits: u64,
    /// Lookup misses (including invalidations).
    pub misses: u64,
    /// LRU evictions.
    pub evictions: u64,
    /// hits / (hits + misses), 0.0 when no lookups happened.
    pub hit_rate: f64,
}

struct CacheEntry {
    content_hash: String,
    modified: SystemTime,
    analysis: Arc<FileAnalysis>,
    last_access: u64,
}

/// Concurrent LRU cache of [`FileAnalysis`] keyed by path.
pub struct AnalysisCache {
    entries: DashMap<PathBuf, CacheEntry>,
    capacity: usize,
    enabled: bool,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    clock: AtomicU64,
}

impl AnalysisCache {
    /// Creates a cache. The requested capacity is clamped to the hard
    /// ceiling; the cache never holds more entries than the clamped value.
    #[must_use]
    pub fn new(capacity: usize, enabled: bool) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.clamp(1, MAX_CACHE_CAPACITY),
            enabled,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            clock: AtomicU64::new(0),
        }
    }

    /// Looks up a valid entry for `path`. Both the content hash and the
    /// modification time must match; a mismatching entry is dropped and the
    /// lookup is a miss. Hits refresh the entry's recency.
    #[must_use]
    pub fn lookup(&self, path: &Path, fp: &FileFingerprint) -> Option<Arc<FileAnalysis>> {
        if !self.enabled {
            return None;
        }
        if let Some(mut entry) = self.entries.get_mut(path) {
            if entry.content_hash == fp.content_hash && entry.modified == fp.modified {
                entry.last_access = self.tick();
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(Arc::clone(&entry.analysis));
            }
        }
        // Invalid or absent: drop any stale entry under this path
        self.entries.remove(path);
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Stores an analysis under `path`, evicting least-recently-used
    /// entries first when the cache is full.
    pub fn store(&self, path: &Path, fp: &FileFingerprint, analysis: Arc<FileAnalysis>) {
        if !self.enabled {
            return;
        }
        if !self.entries.contains_key(path) {
            while self.entries.len() >= self.capacity {
                self.evict_lru();
            }
        }
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                content_hash: fp.content_hash.clone(),
                modified: fp.modified,
                analysis,
                last_access: self.tick(),
            },
        );
    }

    /// Removes the entry with the oldest last-access tick.
    fn evict_lru(&self) {
        let mut oldest: Option<(PathBuf, u64)> = None;
        for entry in &self.entries {
            match &oldest {
                Some((_, tick)) if entry.last_access >= *tick => {}
                _ => oldest = Some((entry.key().clone(), entry.last_access)),
            }
        }
        if let Some((path, _)) = oldest {
            if self.entries.remove(&path).is_some() {
                self.evictions.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Current entry count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Counters are preserved.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Observability snapshot.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        #[allow(clippy::cast_precision_loss)]
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        CacheStats {
            size: self.entries.len(),
            capacity: self.capacity,
            enabled: self.enabled,
            hits,
            misses,
            evictions: self.evictions.load(Ordering::Relaxed),
            hit_rate,
        }
    }
}
