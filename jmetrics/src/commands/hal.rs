//! Halstead Complexity Metrics analysis command.

use super::utils::{find_java_files, write_output};
use crate::halstead::analyze_unit;

use anyhow::Result;
use comfy_table::Table;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Serialize)]
struct HalResult {
    file: String,
    name: String,
    h1: usize,
    h2: usize,
    n1: usize,
    n2: usize,
    vocabulary: f64,
    volume: f64,
    difficulty: f64,
    effort: f64,
}

/// Executes the Halstead metrics analysis per method.
///
/// # Errors
///
/// Returns an error if file I/O fails or JSON serialization fails.
pub fn run_hal<W: Write>(
    paths: &[PathBuf],
    json: bool,
    exclude: Vec<String>,
    output_file: Option<String>,
    verbose: bool,
    mut writer: W,
) -> Result<()> {
    let files = find_java_files(paths, &exclude, verbose);

    let results: Vec<HalResult> = files
        .par_iter()
        .flat_map(|file_path| {
            let code = fs::read_to_string(file_path).unwrap_or_default();
            let mut file_results = Vec::new();

            if let Ok(unit) = crate::parser::parse_source(&code) {
                for (name, metrics) in analyze_unit(&unit) {
                    file_results.push(HalResult {
                        file: crate::utils::normalize_display_path(file_path),
                        name,
                        h1: metrics.h1,
                        h2: metrics.h2,
                        n1: metrics.n1,
                        n2: metrics.n2,
                        vocabulary: metrics.vocabulary,
                        volume: metrics.volume,
                        difficulty: metrics.difficulty,
                        effort: metrics.effort,
                    });
                }
            }
            file_results
        })
        .collect();

    if json {
        write_output(
            &mut writer,
            &serde_json::to_string_pretty(&results)?,
            output_file,
        )?;
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            "File",
            "Method",
            "n1",
            "n2",
            "N1",
            "N2",
            "Vocabulary",
            "Volume",
            "Difficulty",
            "Effort",
        ]);
        for r in results {
            table.add_row(vec![
                r.file,
                r.name,
                r.n1.to_string(),
                r.n2.to_string(),
                r.h1.to_string(),
                r.h2.to_string(),
                format!("{:.0}", r.vocabulary),
                format!("{:.2}", r.volume),
                format!("{:.2}", r.difficulty),
                format!("{:.2}", r.effort),
            ]);
        }
        write_output(&mut writer, &table.to_string(), output_file)?;
    }
    Ok(())
}
