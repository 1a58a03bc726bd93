//! Algorithmic (Big-O) complexity estimation command.

use super::utils::{find_java_files, write_output};
use crate::bigo::analyze_unit;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Serialize)]
struct BigoResult {
    file: String,
    method: String,
    line: usize,
    class: String,
    nested_depth: usize,
    reason: String,
}

/// Executes the algorithmic complexity estimation. Only methods estimated
/// above O(1) are listed.
///
/// # Errors
///
/// Returns an error if file I/O fails or JSON serialization fails.
pub fn run_bigo<W: Write>(
    paths: &[PathBuf],
    json: bool,
    exclude: Vec<String>,
    output_file: Option<String>,
    verbose: bool,
    mut writer: W,
) -> Result<()> {
    let files = find_java_files(paths, &exclude, verbose);

    let results: Vec<BigoResult> = files
        .par_iter()
        .flat_map(|file_path| {
            let code = fs::read_to_string(file_path).unwrap_or_default();
            let mut file_results = Vec::new();

            if let Ok(unit) = crate::parser::parse_source(&code) {
                for info in analyze_unit(&unit, file_path) {
                    file_results.push(BigoResult {
                        file: crate::utils::normalize_display_path(file_path),
                        method: info.method,
                        line: info.line,
                        class: info.class.to_string(),
                        nested_depth: info.nested_depth,
                        reason: info.reason,
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
        table.set_header(vec!["File", "Method", "Line", "Estimate", "Reason"]);
        for r in results {
            let estimate_colored = match r.class.as_str() {
                "O(log n)" | "O(n)" => r.class.green(),
                "O(n log n)" | "O(n^2)" => r.class.yellow(),
                _ => r.class.red().bold(),
            };
            table.add_row(vec![
                r.file,
                r.method,
                r.line.to_string(),
                estimate_colored.to_string(),
                r.reason,
            ]);
        }
        write_output(&mut writer, &table.to_string(), output_file)?;
    }
    Ok(())
}
