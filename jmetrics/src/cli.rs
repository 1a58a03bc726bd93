use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (jmetrics.toml):
  Create this file in your project root to set defaults.

  [jmetrics]
  # Pipeline settings
  parallel = true            # Analyze files across the worker pool
  threads = 8                # Worker count (default: available parallelism)
  parallel_threshold = 8     # Stay sequential below this file count
  queue_depth = 256          # Bounded task queue depth

  # Result cache
  cache = true               # Content-hash result cache
  cache_capacity = 10000     # Entries (clamped to the hard ceiling)

  # Quality gates
  max_complexity = 10        # Max cyclomatic complexity
  min_mi = 65.0              # Min normalized Maintainability Index

  # Path filters
  exclude_folders = [\"build\", \"out\"]
  include_folders = [\"src\"]  # Force-include these
";

/// Common options for metric subcommands (cc, bigo, hal, mi, ck).
/// Use `#[command(flatten)]` to include these in a subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct MetricArgs {
    /// Paths to analyze (files or directories). Defaults to the current
    /// directory when empty.
    pub paths: Vec<PathBuf>,

    /// Output JSON.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Exclude folders.
    #[arg(long, short = 'e', alias = "exclude-folder")]
    pub exclude: Vec<String>,

    /// Save output to file.
    #[arg(long, short = 'O')]
    pub output_file: Option<String>,

    /// Enable verbose output for debugging (shows files being analyzed).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rank filtering options (A-F grades) for the complexity command.
#[derive(Args, Debug, Default, Clone)]
pub struct RankArgs {
    /// Set minimum rank (A-F).
    #[arg(long, short = 'n', alias = "min")]
    pub min_rank: Option<char>,

    /// Set maximum rank (A-F).
    #[arg(long, short = 'x', alias = "max")]
    pub max_rank: Option<char>,
}

/// jmetrics: engineering-quality metrics for Java source trees.
#[derive(Parser, Debug)]
#[command(name = "jmetrics", version, after_help = CONFIG_HELP)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis pipeline (complexity, CK metrics, Halstead, MI)
    Analyze {
        /// Common metric options (paths, json, exclude, `output_file`).
        #[command(flatten)]
        common: MetricArgs,

        /// Process files one at a time instead of across the worker pool.
        #[arg(long)]
        sequential: bool,

        /// Worker thread count (default: available parallelism).
        #[arg(long, short = 't')]
        threads: Option<usize>,

        /// Disable the content-hash result cache.
        #[arg(long)]
        no_cache: bool,
    },
    /// Calculate Cyclomatic Complexity per method
    Cc {
        /// Common metric options (paths, json, exclude, `output_file`).
        #[command(flatten)]
        common: MetricArgs,

        /// Rank filtering options (min/max rank).
        #[command(flatten)]
        rank: RankArgs,

        /// Show average complexity.
        #[arg(long, short = 'a')]
        average: bool,

        /// Only show total average, no individual details.
        #[arg(long)]
        total_average: bool,

        /// Show complexity score with rank.
        #[arg(long, short = 's')]
        show_complexity: bool,

        /// Ordering function (score, lines, alpha).
        #[arg(long, short = 'o')]
        order: Option<String>,

        /// Exit with code 1 if any method exceeds this complexity.
        #[arg(long)]
        fail_threshold: Option<usize>,
    },
    /// Estimate algorithmic (Big-O) complexity per method
    Bigo {
        /// Common metric options (paths, json, exclude, `output_file`).
        #[command(flatten)]
        common: MetricArgs,
    },
    /// Calculate Halstead Metrics per method
    Hal {
        /// Common metric options (paths, json, exclude, `output_file`).
        #[command(flatten)]
        common: MetricArgs,
    },
    /// Calculate the Maintainability Index per method
    Mi {
        /// Common metric options (paths, json, exclude, `output_file`).
        #[command(flatten)]
        common: MetricArgs,

        /// Show the normalized MI value in the table.
        #[arg(long, short = 's')]
        show: bool,

        /// Show average MI.
        #[arg(long, short = 'a')]
        average: bool,

        /// Exit with code 1 if any method's normalized MI is below this.
        #[arg(long)]
        fail_threshold: Option<f64>,
    },
    /// Calculate Chidamber-Kemerer metrics per class
    Ck {
        /// Common metric options (paths, json, exclude, `output_file`).
        #[command(flatten)]
        common: MetricArgs,
    },
    /// Write a default jmetrics.toml to the current directory
    Init {
        /// Overwrite an existing configuration file.
        #[arg(long)]
        force: bool,
    },
}
