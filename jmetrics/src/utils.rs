use crate::constants::DEFAULT_EXCLUDE_FOLDERS;

/// Checks whether a directory name matches an exclusion pattern. Patterns
/// are literal names except for a leading `*` suffix match.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|pattern| {
        pattern
            .strip_prefix('*')
            .map_or(pattern == name, |suffix| name.ends_with(suffix))
    })
}

/// Collects all Java files under `root`, excluding specified folders.
/// Respects .gitignore files in addition to hardcoded defaults. Returns
/// the files in walk order plus the number of directories visited.
pub fn collect_java_files_gitignore(
    root: &std::path::Path,
    exclude: &[String],
    include: &[String],
    verbose: bool,
) -> (Vec<std::path::PathBuf>, usize) {
    use ignore::WalkBuilder;

    // Merge user excludes with default excludes
    let default_excludes: Vec<String> = DEFAULT_EXCLUDE_FOLDERS()
        .iter()
        .map(|&s| s.to_owned())
        .collect();
    let mut all_excludes: Vec<String> = exclude.iter().cloned().chain(default_excludes).collect();

    // Remove force-included folders from exclusion list
    all_excludes.retain(|ex| !include.iter().any(|inc| ex == inc));

    let excludes_for_filter = all_excludes.clone();
    let root_for_filter = root.to_path_buf();

    // filter_entry skips excluded directories at traversal time, preventing
    // descent into target, build, node_modules, etc.
    let walker = WalkBuilder::new(root)
        .hidden(true) // Skip dotfiles and dot-directories
        .git_ignore(true) // Respect .gitignore files
        .git_global(true) // Respect global gitignore
        .git_exclude(true) // Respect .git/info/exclude
        .filter_entry(move |entry| {
            // Always allow the root directory
            if entry.path() == root_for_filter {
                return true;
            }

            // Only filter directories - allow all files through
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            if let Some(name) = entry.file_name().to_str() {
                if is_excluded(name, &excludes_for_filter) {
                    return false;
                }
            }

            true
        })
        .build();

    let mut files = Vec::new();
    let mut dir_count = 0;

    for result in walker {
        if let Ok(entry) = result {
            let path = entry.path();

            // Count directories (excluded dirs never appear due to filter_entry)
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if path != root {
                    dir_count += 1;
                }
                continue;
            }

            if path.extension().is_some_and(|ext| ext == "java") {
                files.push(path.to_path_buf());
            }
        } else if verbose {
            if let Err(e) = result {
                eprintln!("Walk error: {e}");
            }
        }
    }

    (files, dir_count)
}

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" prefix (for cleaner output)
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_excluded_literal_and_wildcard() {
        let excludes = vec!["target".to_owned(), "*-sources".to_owned()];
        assert!(is_excluded("target", &excludes));
        assert!(is_excluded("generated-sources", &excludes));
        assert!(!is_excluded("src", &excludes));
    }

    #[test]
    fn test_collect_java_files_skips_build_dirs() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let root = dir.path();

        fs::create_dir(root.join("src"))?;
        fs::write(root.join("src/Main.java"), "class Main {}")?;
        fs::create_dir(root.join("target"))?;
        fs::write(root.join("target/Gen.java"), "class Gen {}")?;
        fs::write(root.join("notes.txt"), "not java")?;

        let (files, _) = collect_java_files_gitignore(root, &[], &[], false);
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();

        assert!(names.contains(&"Main.java".to_owned()));
        assert!(!names.contains(&"Gen.java".to_owned()));
        assert!(!names.contains(&"notes.txt".to_owned()));
        Ok(())
    }

    #[test]
    fn test_normalize_display_path() {
        assert_eq!(
            normalize_display_path(std::path::Path::new("./src/Main.java")),
            "src/Main.java"
        );
    }
}
