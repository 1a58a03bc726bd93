//! Maintainability Index (MI) analysis command.

use super::utils::{find_java_files, write_output};
use crate::complexity::cyclomatic;
use crate::metrics::{mi_compute, MaintainabilityLevel};

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Options for Maintainability Index analysis
#[derive(Debug, Default)]
pub struct MiOptions {
    /// Output in JSON format.
    pub json: bool,
    /// List of folder names to exclude.
    pub exclude: Vec<String>,
    /// Show MI value in output table.
    pub show: bool,
    /// Calculate and show average MI.
    pub average: bool,
    /// Fail if any method's normalized MI is under this threshold.
    pub fail_threshold: Option<f64>,
    /// Write output to this file path.
    pub output_file: Option<String>,
    /// Verbose output.
    pub verbose: bool,
}

#[derive(Serialize)]
struct MiResult {
    file: String,
    name: String,
    mi: f64,
    level: MaintainabilityLevel,
}

/// Executes the Maintainability Index (MI) analysis per method.
///
/// # Errors
///
/// Returns an error if file I/O fails or JSON serialization fails.
#[allow(clippy::cast_precision_loss)]
pub fn run_mi<W: Write>(paths: &[PathBuf], options: MiOptions, mut writer: W) -> Result<i32> {
    let files = find_java_files(paths, &options.exclude, options.verbose);

    let results: Vec<MiResult> = files
        .par_iter()
        .flat_map(|file_path| {
            let code = fs::read_to_string(file_path).unwrap_or_default();
            let mut file_results = Vec::new();

            if let Ok(unit) = crate::parser::parse_source(&code) {
                for (class, method) in unit.methods() {
                    let cc = cyclomatic(method);
                    let halstead = crate::halstead::analyze_method(method);
                    let signature = method.signature();
                    let score = mi_compute(halstead.volume, cc, signature.line_count());
                    file_results.push(MiResult {
                        file: crate::utils::normalize_display_path(file_path),
                        name: format!("{}.{}", class.name, method.name),
                        mi: score.normalized,
                        level: score.level,
                    });
                }
            }
            file_results
        })
        .collect();

    // Calculate and show average if requested
    if options.average {
        let total_mi: f64 = results.iter().map(|r| r.mi).sum();
        let count = results.len();
        let avg = if count > 0 { total_mi / count as f64 } else { 0.0 };
        let msg = format!("Average MI: {avg:.2}");
        write_output(&mut writer, &msg, options.output_file.clone())?;
    }

    // Check failure threshold
    if let Some(threshold) = options.fail_threshold {
        let violations: Vec<&MiResult> = results.iter().filter(|r| r.mi < threshold).collect();
        if !violations.is_empty() {
            eprintln!(
                "\n[Error] The following methods have a Maintainability Index below {threshold}:"
            );
            for v in &violations {
                eprintln!("  {}:{} - MI: {:.2}", v.file, v.name, v.mi);
            }
            return Ok(1);
        }
    }

    if options.json {
        write_output(
            &mut writer,
            &serde_json::to_string_pretty(&results)?,
            options.output_file,
        )?;
    } else {
        let mut table = Table::new();
        if options.show {
            table.set_header(vec!["File", "Method", "MI", "Level"]);
        } else {
            table.set_header(vec!["File", "Method", "Level"]);
        }

        for r in results {
            let level_colored = match r.level {
                MaintainabilityLevel::High => r.level.to_string().green(),
                MaintainabilityLevel::Moderate => r.level.to_string().yellow(),
                MaintainabilityLevel::Low => r.level.to_string().red(),
            };

            let mut row = vec![r.file.clone(), r.name.clone()];
            if options.show {
                row.push(format!("{:.2}", r.mi));
            }
            row.push(level_colored.to_string());
            table.add_row(row);
        }
        write_output(&mut writer, &table.to_string(), options.output_file)?;
    }
    Ok(0)
}
