//! Processing methods for the analyzer.
//!
//! Contains: `analyze`, `analyze_paths`, `analyze_file`, aggregation and the
//! sequential/parallel dispatch. Per-file analysis touches no shared mutable
//! state beyond the result cache, so the sequential and parallel paths
//! produce identical aggregates.

use super::pool::WorkerPool;
use super::types::{
    AnalysisError, FileAnalysis, MethodAnalysis, ProjectResult, ProjectSummary,
};
use super::Analyzer;
use crate::cache::{self, AnalysisCache, FileFingerprint};
use crate::complexity::cyclomatic;
use crate::metrics::mi_compute;
use crate::raw_metrics::analyze_raw;
use crate::syntax::CompilationUnit;
use anyhow::Result;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Grace period granted to workers during pool shutdown before the
/// remaining ones are detached.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

type FileOutcome = Result<Arc<FileAnalysis>, AnalysisError>;

impl Analyzer {
    /// Runs the analysis on the specified root directory.
    ///
    /// This method:
    /// 1. Walks the directory tree to find Java files.
    /// 2. Routes each file through the cache and the calculators, either
    ///    sequentially or across the worker pool.
    /// 3. Aggregates per-file results; failing files are logged and skipped.
    pub fn analyze(&self, root: &Path) -> Result<ProjectResult> {
        let (files, _) = crate::utils::collect_java_files_gitignore(
            root,
            &self.exclude_folders,
            &self.include_folders,
            self.verbose,
        );
        Ok(self.analyze_file_list(files))
    }

    /// Runs the analysis on multiple paths (files or directories).
    ///
    /// Individual Java files are taken as-is; directories are walked with
    /// the same exclusion rules as [`Analyzer::analyze`]. An empty slice
    /// analyzes the current directory.
    pub fn analyze_paths(&self, paths: &[PathBuf]) -> Result<ProjectResult> {
        if paths.is_empty() {
            return self.analyze(Path::new("."));
        }
        if paths.len() == 1 && paths[0].is_dir() {
            return self.analyze(&paths[0]);
        }

        let mut all_files = Vec::new();
        for path in paths {
            if path.is_file() {
                if path.extension().is_some_and(|ext| ext == "java") {
                    all_files.push(path.clone());
                }
            } else if path.is_dir() {
                let (files, _) = crate::utils::collect_java_files_gitignore(
                    path,
                    &self.exclude_folders,
                    &self.include_folders,
                    self.verbose,
                );
                all_files.extend(files);
            }
        }
        Ok(self.analyze_file_list(all_files))
    }

    /// Analyzes one file through the cache. Cache validity requires both
    /// the content hash and the modification time to match.
    pub fn analyze_file(&self, path: &Path) -> FileOutcome {
        process_file(path, &self.cache)
    }

    /// Analyzes a single string of code (mostly for testing). Bypasses the
    /// cache and the filesystem.
    pub fn analyze_code(&self, code: &str, path: PathBuf) -> FileOutcome {
        let unit = crate::parser::parse_source(code).map_err(|diagnostics| {
            AnalysisError::Parse {
                file: path.clone(),
                diagnostics,
            }
        })?;
        Ok(Arc::new(build_file_analysis(&path, code, &unit)))
    }

    fn analyze_file_list(&self, files: Vec<PathBuf>) -> ProjectResult {
        let started = Instant::now();
        let total_files = files.len();

        let use_pool = self.parallel && total_files > self.parallel_threshold;
        let outcomes = if use_pool {
            self.run_parallel(&files)
        } else {
            self.run_sequential(&files)
        };

        self.aggregate(outcomes, total_files, started.elapsed())
    }

    fn run_sequential(&self, files: &[PathBuf]) -> Vec<(usize, FileOutcome)> {
        files
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let outcome = process_file(path, &self.cache);
                if let Some(bar) = &self.progress_bar {
                    bar.inc(1);
                }
                (index, outcome)
            })
            .collect()
    }

    /// Fans files out over the bounded pool. Collection blocks until every
    /// task has reported; a panicking task reports `TaskFailed` rather than
    /// wedging the run.
    fn run_parallel(&self, files: &[PathBuf]) -> Vec<(usize, FileOutcome)> {
        let pool = WorkerPool::new(self.effective_threads(), self.queue_depth);
        let (sender, receiver) = mpsc::channel::<(usize, FileOutcome)>();

        for (index, path) in files.iter().enumerate() {
            let sender = sender.clone();
            let cache = Arc::clone(&self.cache);
            let path = path.clone();
            pool.execute(move || {
                let outcome =
                    std::panic::catch_unwind(AssertUnwindSafe(|| process_file(&path, &cache)))
                        .unwrap_or_else(|_| {
                            Err(AnalysisError::TaskFailed { file: path.clone() })
                        });
                // Receiver outliving the send is guaranteed while collection
                // below is still counting
                let _ = sender.send((index, outcome));
            });
        }
        drop(sender);

        let mut outcomes = Vec::with_capacity(files.len());
        for (index, outcome) in receiver {
            if let Some(bar) = &self.progress_bar {
                bar.inc(1);
            }
            outcomes.push((index, outcome));
        }

        if !pool.shutdown(SHUTDOWN_GRACE) && self.verbose {
            eprintln!("worker pool did not drain within grace period; detaching");
        }
        outcomes
    }

    /// Merges per-file outcomes into the project result. Outcomes are
    /// re-sorted by discovery index first, so the aggregate is identical
    /// whatever order the workers finished in.
    fn aggregate(
        &self,
        mut outcomes: Vec<(usize, FileOutcome)>,
        total_files: usize,
        elapsed: Duration,
    ) -> ProjectResult {
        outcomes.sort_by_key(|(index, _)| *index);

        let mut files = Vec::new();
        let mut complexity = Vec::new();
        let mut class_metrics = Vec::new();
        let mut parse_errors = Vec::new();
        let mut total_lines = 0;
        let mut total_methods = 0;

        for (_, outcome) in outcomes {
            match outcome {
                Ok(analysis) => {
                    total_lines += analysis.loc;
                    total_methods += analysis.methods.len();
                    complexity.extend(analysis.complexity.iter().cloned());
                    class_metrics.extend(analysis.primary_class.iter().cloned());
                    files.push(analysis);
                }
                Err(error) => {
                    if self.verbose {
                        eprintln!("skipping {error}");
                    }
                    parse_errors.push(error.to_parse_error());
                }
            }
        }

        let summary = ProjectSummary {
            total_files,
            analyzed_files: files.len(),
            skipped_files: parse_errors.len(),
            total_lines,
            total_methods,
            elapsed_ms: elapsed.as_millis(),
        };

        ProjectResult {
            files,
            complexity,
            class_metrics,
            parse_errors,
            summary,
            cache_stats: self.cache.stats(),
        }
    }
}

/// Cache lookup, parse and metric computation for one file. Free function
/// so parallel tasks only capture the cache handle.
fn process_file(path: &Path, cache: &AnalysisCache) -> FileOutcome {
    let bytes = std::fs::read(path).map_err(|source| AnalysisError::Io {
        file: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes).into_owned();

    // Any error while fingerprinting degrades to "no cache" for this file
    let fingerprint = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(|modified| FileFingerprint {
            content_hash: cache::hash_bytes(&bytes),
            modified,
        });

    if let Some(fp) = &fingerprint {
        if let Some(hit) = cache.lookup(path, fp) {
            return Ok(hit);
        }
    }

    let unit = crate::parser::parse_source(&source).map_err(|diagnostics| {
        AnalysisError::Parse {
            file: path.to_path_buf(),
            diagnostics,
        }
    })?;

    let analysis = Arc::new(build_file_analysis(path, &source, &unit));
    if let Some(fp) = &fingerprint {
        cache.store(path, fp, Arc::clone(&analysis));
    }
    Ok(analysis)
}

/// Runs every calculator over one lowered unit.
pub(crate) fn build_file_analysis(
    path: &Path,
    source: &str,
    unit: &CompilationUnit,
) -> FileAnalysis {
    let raw = analyze_raw(source);

    let methods: Vec<MethodAnalysis> = unit
        .methods()
        .map(|(class, method)| {
            let cc = cyclomatic(method);
            let halstead = crate::halstead::analyze_method(method);
            let signature = method.signature();
            let maintainability = mi_compute(halstead.volume, cc, signature.line_count());
            MethodAnalysis {
                class_name: class.name.clone(),
                signature,
                cyclomatic: cc,
                halstead,
                maintainability,
            }
        })
        .collect();

    let complexity = crate::bigo::analyze_unit(unit, path);
    let primary_class = crate::ck::analyze_unit(unit).into_iter().next();

    FileAnalysis {
        path: path.to_path_buf(),
        loc: raw.loc,
        methods,
        complexity,
        primary_class,
    }
}
