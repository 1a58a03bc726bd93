//! `init` command: write a default configuration file.

use crate::constants::CONFIG_FILENAME;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

const DEFAULT_CONFIG: &str = "\
[jmetrics]
# Pipeline
parallel = true
# threads = 8
# parallel_threshold = 8
# queue_depth = 256

# Result cache
cache = true
cache_capacity = 10000

# Quality gates
# max_complexity = 10
# min_mi = 65.0

# Path filters
exclude_folders = []
include_folders = []
";

/// Writes a default `jmetrics.toml` into `dir`.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn run_init<W: Write>(dir: &Path, force: bool, mut writer: W) -> Result<i32> {
    let target = dir.join(CONFIG_FILENAME);
    if target.exists() && !force {
        writeln!(
            writer,
            "{} already exists (use --force to overwrite)",
            target.display()
        )?;
        return Ok(1);
    }
    std::fs::write(&target, DEFAULT_CONFIG)?;
    writeln!(writer, "Wrote {}", target.display())?;
    Ok(0)
}
