use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for jmetrics.
    pub jmetrics: JmetricsConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for jmetrics.
pub struct JmetricsConfig {
    /// Whether to analyze files across the worker pool.
    pub parallel: Option<bool>,
    /// Worker thread count; defaults to the host's available parallelism.
    pub threads: Option<usize>,
    /// File count below which the run stays sequential even with
    /// `parallel = true`.
    pub parallel_threshold: Option<usize>,
    /// Bounded depth of the pool's task queue.
    pub queue_depth: Option<usize>,
    /// Whether the result cache is active.
    pub cache: Option<bool>,
    /// Requested cache capacity (clamped to the hard ceiling).
    pub cache_capacity: Option<usize>,
    /// List of folders to exclude.
    pub exclude_folders: Option<Vec<String>>,
    /// List of folders to force-include.
    pub include_folders: Option<Vec<String>>,
    /// Maximum allowed cyclomatic complexity (CI gate).
    pub max_complexity: Option<usize>,
    /// Minimum allowed normalized Maintainability Index (CI gate).
    pub min_mi: Option<f64>,
}

impl Config {
    /// Loads configuration from the current directory upwards.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let config_toml = current.join(CONFIG_FILENAME);
            if config_toml.exists() {
                if let Ok(content) = fs::read_to_string(&config_toml) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(config_toml);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Self::default()
    }
}
