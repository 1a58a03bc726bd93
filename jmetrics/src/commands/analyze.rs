//! Full analysis pipeline command.

use super::utils::write_output;
use crate::analyzer::Analyzer;
use crate::config::Config;

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Options for the full analysis run.
#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    /// Output in JSON format.
    pub json: bool,
    /// List of folder names to exclude.
    pub exclude: Vec<String>,
    /// Process files sequentially.
    pub sequential: bool,
    /// Worker thread count override.
    pub threads: Option<usize>,
    /// Disable the result cache.
    pub no_cache: bool,
    /// Write output to this file path.
    pub output_file: Option<String>,
    /// Verbose output.
    pub verbose: bool,
}

/// Executes the full pipeline: discovery, cached per-file analysis across
/// the worker pool, and the aggregated project report.
///
/// # Errors
///
/// Returns an error if the analysis, file I/O or serialization fails.
pub fn run_analyze<W: Write>(
    paths: &[PathBuf],
    config: Config,
    options: AnalyzeOptions,
    mut writer: W,
) -> Result<i32> {
    let mut analyzer = Analyzer::from_config(config)
        .with_verbose(options.verbose)
        .with_excludes(options.exclude);
    if options.sequential {
        analyzer = analyzer.with_parallel(false);
    }
    if let Some(threads) = options.threads {
        analyzer = analyzer.with_threads(threads);
    }
    if options.no_cache {
        analyzer = analyzer.with_cache(1, false);
    }

    let file_count = analyzer.count_files(paths);
    let bar = Arc::new(crate::output::create_progress_bar(file_count as u64));
    analyzer = analyzer.with_progress(Arc::clone(&bar));

    let result = analyzer.analyze_paths(paths)?;
    bar.finish_and_clear();

    if options.json {
        write_output(
            &mut writer,
            &serde_json::to_string_pretty(&result)?,
            options.output_file,
        )?;
    } else {
        let rendered = crate::output::render_project_result(&result);
        write_output(&mut writer, &rendered, options.output_file)?;
    }
    Ok(0)
}
