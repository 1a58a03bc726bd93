//! Type definitions for analysis results.

use crate::bigo::ComplexityInfo;
use crate::cache::CacheStats;
use crate::ck::ClassMetrics;
use crate::halstead::HalsteadMetrics;
use crate::metrics::MaintainabilityScore;
use crate::parser::ParseDiagnostic;
use crate::syntax::MethodSignature;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Represents a parsing error in a file.
#[derive(Debug, Serialize, Clone)]
pub struct ParseError {
    /// The file where the error occurred.
    pub file: PathBuf,
    /// The error message.
    pub error: String,
}

/// Why a single file contributed nothing to the aggregate. The orchestrator
/// pattern-matches and continues; a failing file never aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The parser rejected the file.
    #[error("{}: {} syntax problem(s), first at line {}", file.display(), diagnostics.len(), diagnostics.first().map_or(0, |d| d.line))]
    Parse {
        /// Offending file.
        file: PathBuf,
        /// Parser diagnostics with locations.
        diagnostics: Vec<ParseDiagnostic>,
    },
    /// The file could not be read.
    #[error("{}: {source}", file.display())]
    Io {
        /// Offending file.
        file: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The analysis task died (panicked worker); the file is skipped.
    #[error("{}: analysis task failed", file.display())]
    TaskFailed {
        /// Offending file.
        file: PathBuf,
    },
}

impl AnalysisError {
    /// The file this error belongs to.
    #[must_use]
    pub fn file(&self) -> &PathBuf {
        match self {
            Self::Parse { file, .. } | Self::Io { file, .. } | Self::TaskFailed { file } => file,
        }
    }

    /// Converts into the serializable per-file error record.
    #[must_use]
    pub fn to_parse_error(&self) -> ParseError {
        ParseError {
            file: self.file().clone(),
            error: self.to_string(),
        }
    }
}

/// Everything computed for one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodAnalysis {
    /// Owning class name.
    pub class_name: String,
    /// Name, arity and extent.
    pub signature: MethodSignature,
    /// McCabe cyclomatic complexity (>= 1).
    pub cyclomatic: usize,
    /// Halstead counts and derived measures.
    pub halstead: HalsteadMetrics,
    /// Maintainability score.
    pub maintainability: MaintainabilityScore,
}

/// The immutable per-file analysis product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAnalysis {
    /// Analyzed file.
    pub path: PathBuf,
    /// Total line count.
    pub loc: usize,
    /// Per-method metrics in declaration order.
    pub methods: Vec<MethodAnalysis>,
    /// Above-constant complexity estimates.
    pub complexity: Vec<ComplexityInfo>,
    /// CK metrics of the primary (first non-interface) class, when any.
    pub primary_class: Option<ClassMetrics>,
}

/// Aggregated counts for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    /// Files discovered.
    pub total_files: usize,
    /// Files analyzed successfully.
    pub analyzed_files: usize,
    /// Files skipped (parse or I/O failures).
    pub skipped_files: usize,
    /// Sum of line counts over analyzed files.
    pub total_lines: usize,
    /// Sum of method counts over analyzed files.
    pub total_methods: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u128,
}

/// Holds the results of one project analysis.
/// This struct is serialized to JSON if requested.
#[derive(Serialize)]
pub struct ProjectResult {
    /// Per-file analyses in discovery order (skipped files absent).
    #[serde(skip)]
    pub files: Vec<Arc<FileAnalysis>>,
    /// Concatenated complexity estimates, in discovery order.
    pub complexity: Vec<ComplexityInfo>,
    /// Concatenated primary-class CK metrics, in discovery order.
    pub class_metrics: Vec<ClassMetrics>,
    /// Per-file failures.
    pub parse_errors: Vec<ParseError>,
    /// Aggregate counts and timing.
    pub summary: ProjectSummary,
    /// Cache counters at the end of the run.
    pub cache_stats: CacheStats,
}
