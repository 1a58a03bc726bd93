//! Chidamber-Kemerer class metrics command.

use super::utils::{find_java_files, write_output};
use crate::ck::analyze_unit;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Serialize)]
struct CkResult {
    file: String,
    class: String,
    wmc: usize,
    dit: usize,
    noc: usize,
    cbo: usize,
    rfc: usize,
    lcom: usize,
    quality_score: usize,
    god_class: bool,
}

/// Executes the CK metrics analysis per class. Interfaces are skipped.
///
/// # Errors
///
/// Returns an error if file I/O fails or JSON serialization fails.
pub fn run_ck<W: Write>(
    paths: &[PathBuf],
    json: bool,
    exclude: Vec<String>,
    output_file: Option<String>,
    verbose: bool,
    mut writer: W,
) -> Result<()> {
    let files = find_java_files(paths, &exclude, verbose);

    let results: Vec<CkResult> = files
        .par_iter()
        .flat_map(|file_path| {
            let code = fs::read_to_string(file_path).unwrap_or_default();
            let mut file_results = Vec::new();

            if let Ok(unit) = crate::parser::parse_source(&code) {
                for metrics in analyze_unit(&unit) {
                    file_results.push(CkResult {
                        file: crate::utils::normalize_display_path(file_path),
                        class: metrics.class_name.clone(),
                        wmc: metrics.wmc,
                        dit: metrics.dit,
                        noc: metrics.noc,
                        cbo: metrics.cbo,
                        rfc: metrics.rfc,
                        lcom: metrics.lcom,
                        quality_score: metrics.quality_score(),
                        god_class: metrics.is_god_class(),
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
            "File", "Class", "WMC", "DIT", "NOC", "CBO", "RFC", "LCOM", "Score",
        ]);
        for r in results {
            let score = if r.god_class {
                format!("{} (god class)", r.quality_score).red().bold()
            } else if r.quality_score < 70 {
                r.quality_score.to_string().yellow()
            } else {
                r.quality_score.to_string().green()
            };
            table.add_row(vec![
                r.file,
                r.class,
                r.wmc.to_string(),
                r.dit.to_string(),
                r.noc.to_string(),
                r.cbo.to_string(),
                r.rfc.to_string(),
                r.lcom.to_string(),
                score.to_string(),
            ]);
        }
        write_output(&mut writer, &table.to_string(), output_file)?;
    }
    Ok(())
}
