//! Shared utilities for command implementations.

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Finds all Java files under the given roots, excluding specified folders.
/// Respects .gitignore files in addition to hardcoded defaults.
pub fn find_java_files(roots: &[PathBuf], exclude: &[String], verbose: bool) -> Vec<PathBuf> {
    let mut all_files = Vec::new();
    if roots.is_empty() {
        let (files, _) = crate::utils::collect_java_files_gitignore(
            std::path::Path::new("."),
            exclude,
            &[],
            verbose,
        );
        return files;
    }
    for root in roots {
        if root.is_file() {
            if root.extension().is_some_and(|ext| ext == "java") {
                all_files.push(root.clone());
            }
            continue;
        }
        let (files, _) = crate::utils::collect_java_files_gitignore(root, exclude, &[], verbose);
        all_files.extend(files);
    }
    all_files
}

/// Writes `content` to the writer, or to `output_file` when given.
pub fn write_output<W: Write>(
    writer: &mut W,
    content: &str,
    output_file: Option<String>,
) -> Result<()> {
    match output_file {
        Some(path) => fs::write(path, format!("{content}\n"))?,
        None => writeln!(writer, "{content}")?,
    }
    Ok(())
}

/// Trait for items that can be filtered by rank (A-F).
pub trait HasRank {
    /// The item's rank letter.
    fn rank(&self) -> char;
}

/// Filters a list of items by minimum and/or maximum rank.
/// Rank ordering: A < B < C < D < E < F (A is best, F is worst).
pub fn filter_by_rank<T: HasRank>(
    items: Vec<T>,
    min_rank: Option<char>,
    max_rank: Option<char>,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| {
            let rank = item.rank();
            let passes_min = min_rank.map_or(true, |min| rank >= min);
            let passes_max = max_rank.map_or(true, |max| rank <= max);
            passes_min && passes_max
        })
        .collect()
}
