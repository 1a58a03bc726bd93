//! Tests for the content-addressed analysis result cache.

#![allow(clippy::unwrap_used)]

use jmetrics::analyzer::FileAnalysis;
use jmetrics::cache::{fingerprint, hash_bytes, AnalysisCache, FileFingerprint};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

fn dummy_analysis(path: &str) -> Arc<FileAnalysis> {
    Arc::new(FileAnalysis {
        path: PathBuf::from(path),
        loc: 1,
        methods: Vec::new(),
        complexity: Vec::new(),
        primary_class: None,
    })
}

fn fp(hash: &str, secs: u64) -> FileFingerprint {
    FileFingerprint {
        content_hash: hash.to_owned(),
        modified: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
    }
}

#[test]
fn test_lookup_hit_on_matching_fingerprint() {
    let cache = AnalysisCache::new(10, true);
    let path = Path::new("A.java");
    let fingerprint = fp("abc", 100);

    cache.store(path, &fingerprint, dummy_analysis("A.java"));
    assert!(cache.lookup(path, &fingerprint).is_some());

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.size, 1);
}

#[test]
fn test_changed_bytes_are_a_miss() {
    let cache = AnalysisCache::new(10, true);
    let path = Path::new("A.java");

    cache.store(path, &fp("abc", 100), dummy_analysis("A.java"));
    assert!(cache.lookup(path, &fp("def", 100)).is_none());
    assert_eq!(cache.stats().misses, 1);
    // The stale entry is dropped
    assert_eq!(cache.stats().size, 0);
}

#[test]
fn test_changed_mtime_is_a_miss() {
    let cache = AnalysisCache::new(10, true);
    let path = Path::new("A.java");

    cache.store(path, &fp("abc", 100), dummy_analysis("A.java"));
    assert!(cache.lookup(path, &fp("abc", 200)).is_none());
    assert_eq!(cache.stats().misses, 1);
}

#[test]
fn test_lru_eviction_targets_oldest_access() {
    let cache = AnalysisCache::new(2, true);
    let a = Path::new("A.java");
    let b = Path::new("B.java");
    let c = Path::new("C.java");

    cache.store(a, &fp("a", 1), dummy_analysis("A.java"));
    cache.store(b, &fp("b", 1), dummy_analysis("B.java"));
    // Touch A so B becomes the least recently used
    assert!(cache.lookup(a, &fp("a", 1)).is_some());

    cache.store(c, &fp("c", 1), dummy_analysis("C.java"));

    let stats = cache.stats();
    assert_eq!(stats.size, 2);
    assert_eq!(stats.evictions, 1);
    assert!(cache.lookup(a, &fp("a", 1)).is_some());
    assert!(cache.lookup(c, &fp("c", 1)).is_some());
    assert!(cache.lookup(b, &fp("b", 1)).is_none());
}

#[test]
fn test_cache_never_exceeds_capacity() {
    let cache = AnalysisCache::new(3, true);
    for i in 0..50 {
        let name = format!("File{i}.java");
        cache.store(Path::new(&name), &fp(&name, i), dummy_analysis(&name));
        assert!(cache.len() <= 3);
    }
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.stats().evictions, 47);
}

#[test]
fn test_capacity_is_clamped_to_hard_ceiling() {
    let cache = AnalysisCache::new(usize::MAX, true);
    assert_eq!(
        cache.stats().capacity,
        jmetrics::constants::MAX_CACHE_CAPACITY
    );
}

#[test]
fn test_disabled_cache_stores_and_returns_nothing() {
    let cache = AnalysisCache::new(10, false);
    let path = Path::new("A.java");
    cache.store(path, &fp("abc", 1), dummy_analysis("A.java"));
    assert!(cache.lookup(path, &fp("abc", 1)).is_none());
    assert_eq!(cache.len(), 0);
    assert!(!cache.stats().enabled);
}

#[test]
fn test_restore_after_invalidation() {
    let cache = AnalysisCache::new(10, true);
    let path = Path::new("A.java");

    cache.store(path, &fp("v1", 1), dummy_analysis("A.java"));
    assert!(cache.lookup(path, &fp("v2", 2)).is_none());
    cache.store(path, &fp("v2", 2), dummy_analysis("A.java"));
    assert!(cache.lookup(path, &fp("v2", 2)).is_some());
}

#[test]
fn test_hash_bytes_is_stable_sha256() {
    // SHA-256 of the empty input is a fixed constant
    assert_eq!(
        hash_bytes(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_ne!(hash_bytes(b"a"), hash_bytes(b"b"));
}

#[test]
fn test_fingerprint_reads_real_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("A.java");
    std::fs::write(&file, "class A {}").unwrap();

    let fp1 = fingerprint(&file).unwrap();
    let fp2 = fingerprint(&file).unwrap();
    assert_eq!(fp1, fp2);

    std::fs::write(&file, "class B {}").unwrap();
    let fp3 = fingerprint(&file).unwrap();
    assert_ne!(fp1.content_hash, fp3.content_hash);
}

#[test]
fn test_fingerprint_missing_file_is_an_error() {
    assert!(fingerprint(Path::new("does/not/Exist.java")).is_err());
}

#[test]
fn test_clear_keeps_counters() {
    let cache = AnalysisCache::new(10, true);
    let path = Path::new("A.java");
    assert!(cache.is_empty());

    cache.store(path, &fp("x", 1), dummy_analysis("A.java"));
    let _ = cache.lookup(path, &fp("x", 1));
    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn test_hit_rate_reporting() {
    let cache = AnalysisCache::new(10, true);
    let path = Path::new("A.java");
    cache.store(path, &fp("x", 1), dummy_analysis("A.java"));
    let _ = cache.lookup(path, &fp("x", 1)); // hit
    let _ = cache.lookup(path, &fp("y", 1)); // miss
    let stats = cache.stats();
    assert!((stats.hit_rate - 0.5).abs() < f64::EPSILON);
}
