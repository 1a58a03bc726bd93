//! Console output formatting: progress bars, tables and the project
//! summary rendering.

use crate::analyzer::ProjectResult;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write as FmtWrite;
use std::time::Duration;

/// Create a progress bar with file count (used when total files is known).
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
#[must_use]
pub fn create_progress_bar(total: u64) -> ProgressBar {
    if cfg!(test) || total == 0 {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Renders the full project report as text: summary, complexity estimates,
/// class metrics and skipped files.
#[must_use]
#[allow(clippy::format_push_string)]
pub fn render_project_result(result: &ProjectResult) -> String {
    let mut out = String::new();
    let summary = &result.summary;

    let _ = writeln!(out, "{}", "Analysis summary".bold());
    let _ = writeln!(
        out,
        "  files: {} analyzed, {} skipped of {} discovered",
        summary.analyzed_files, summary.skipped_files, summary.total_files
    );
    let _ = writeln!(
        out,
        "  lines: {}  methods: {}  elapsed: {} ms",
        summary.total_lines, summary.total_methods, summary.elapsed_ms
    );

    let cache = &result.cache_stats;
    if cache.enabled {
        let _ = writeln!(
            out,
            "  cache: {}/{} entries, {} hits / {} misses ({:.0}% hit rate), {} evictions",
            cache.size,
            cache.capacity,
            cache.hits,
            cache.misses,
            cache.hit_rate * 100.0,
            cache.evictions
        );
    }

    if !result.complexity.is_empty() {
        let _ = writeln!(out, "\n{}", "Complexity estimates".bold());
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Method", "Line", "Estimate", "Depth", "Reason"]);
        for info in &result.complexity {
            table.add_row(vec![
                info.method.clone(),
                info.line.to_string(),
                info.class.to_string(),
                info.nested_depth.to_string(),
                info.reason.clone(),
            ]);
        }
        let _ = writeln!(out, "{table}");
    }

    if !result.class_metrics.is_empty() {
        let _ = writeln!(out, "\n{}", "Class metrics (CK)".bold());
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Class", "WMC", "DIT", "NOC", "CBO", "RFC", "LCOM", "Score",
            ]);
        for metrics in &result.class_metrics {
            table.add_row(vec![
                metrics.class_name.clone(),
                metrics.wmc.to_string(),
                metrics.dit.to_string(),
                metrics.noc.to_string(),
                metrics.cbo.to_string(),
                metrics.rfc.to_string(),
                metrics.lcom.to_string(),
                metrics.quality_score().to_string(),
            ]);
        }
        let _ = writeln!(out, "{table}");
    }

    if !result.parse_errors.is_empty() {
        let _ = writeln!(out, "\n{}", "Skipped files".yellow().bold());
        for error in &result.parse_errors {
            let _ = writeln!(
                out,
                "  {}: {}",
                crate::utils::normalize_display_path(&error.file),
                error.error
            );
        }
    }

    out
}
