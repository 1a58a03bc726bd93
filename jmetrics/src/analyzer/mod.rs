//! jmetrics analyzer module.
//!
//! This module contains the analysis orchestrator, broken down into:
//! - `types`: Result types (`FileAnalysis`, `ProjectResult`, `AnalysisError`)
//! - `pool`: bounded worker pool used in parallel mode
//! - `processing`: file discovery, per-file analysis and aggregation
//! - Core `Analyzer` struct and its builder methods

pub mod pool;
mod processing;
/// Result types and analysis summaries.
pub mod types;

// Re-export types for public API
pub use types::{
    AnalysisError, FileAnalysis, MethodAnalysis, ParseError, ProjectResult, ProjectSummary,
};

use crate::cache::{AnalysisCache, CacheStats};
use crate::config::Config;
use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_QUEUE_DEPTH, MAX_CACHE_CAPACITY};
use std::sync::Arc;

/// The main analyzer struct.
/// Configuration options for the analysis are stored here.
pub struct Analyzer {
    /// Whether to fan per-file analysis out across the worker pool.
    pub parallel: bool,
    /// Worker thread count; `None` uses the host's available parallelism.
    pub threads: Option<usize>,
    /// Below this file count the run stays sequential even in parallel mode.
    pub parallel_threshold: usize,
    /// Bounded depth of the pool's task queue.
    pub queue_depth: usize,
    /// Folders to exclude from analysis.
    pub exclude_folders: Vec<String>,
    /// Folders to force-include in analysis (overrides default exclusions).
    pub include_folders: Vec<String>,
    /// Shared result cache; the only state shared across workers.
    pub cache: Arc<AnalysisCache>,
    /// Progress bar for tracking analysis progress (thread-safe).
    pub progress_bar: Option<Arc<indicatif::ProgressBar>>,
    /// Whether to enable verbose logging.
    pub verbose: bool,
    /// Configuration object.
    pub config: Config,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            queue_depth: DEFAULT_QUEUE_DEPTH,
            exclude_folders: Vec::new(),
            include_folders: Vec::new(),
            cache: Arc::new(AnalysisCache::new(MAX_CACHE_CAPACITY, true)),
            progress_bar: None,
            verbose: false,
            config: Config::default(),
        }
    }
}

impl Analyzer {
    /// Creates an analyzer taking every tunable from `config`.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let jm = &config.jmetrics;
        let cache = Arc::new(AnalysisCache::new(
            jm.cache_capacity.unwrap_or(MAX_CACHE_CAPACITY),
            jm.cache.unwrap_or(true),
        ));
        Self {
            parallel: jm.parallel.unwrap_or(true),
            threads: jm.threads,
            parallel_threshold: jm.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            queue_depth: jm.queue_depth.unwrap_or(DEFAULT_QUEUE_DEPTH),
            exclude_folders: jm.exclude_folders.clone().unwrap_or_default(),
            include_folders: jm.include_folders.clone().unwrap_or_default(),
            cache,
            progress_bar: None,
            verbose: false,
            config,
        }
    }

    /// Builder-style method to toggle parallel mode.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder-style method to pin the worker thread count.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Builder-style method to set the parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder-style method to set excluded folders.
    #[must_use]
    pub fn with_excludes(mut self, folders: Vec<String>) -> Self {
        self.exclude_folders = folders;
        self
    }

    /// Builder-style method to set included folders.
    #[must_use]
    pub fn with_includes(mut self, folders: Vec<String>) -> Self {
        self.include_folders = folders;
        self
    }

    /// Builder-style method to replace the cache (capacity is clamped to
    /// the hard ceiling inside the cache constructor).
    #[must_use]
    pub fn with_cache(mut self, capacity: usize, enabled: bool) -> Self {
        self.cache = Arc::new(AnalysisCache::new(capacity, enabled));
        self
    }

    /// Builder-style method to set verbose mode.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder-style method to attach a progress bar.
    #[must_use]
    pub fn with_progress(mut self, bar: Arc<indicatif::ProgressBar>) -> Self {
        self.progress_bar = Some(bar);
        self
    }

    /// Snapshot of the shared cache's counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The worker count parallel mode would use.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
        })
    }

    /// Counts the Java files a run over `paths` would analyze.
    /// Useful for setting up a progress bar before analysis.
    #[must_use]
    pub fn count_files(&self, paths: &[std::path::PathBuf]) -> usize {
        paths
            .iter()
            .map(|path| {
                crate::utils::collect_java_files_gitignore(
                    path,
                    &self.exclude_folders,
                    &self.include_folders,
                    self.verbose,
                )
                .0
                .len()
            })
            .sum()
    }
}
