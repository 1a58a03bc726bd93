//! CLI entry point: argument parsing and subcommand dispatch.

use crate::cli::{Cli, Commands};
use crate::commands::{AnalyzeOptions, CcOptions, MiOptions};
use anyhow::Result;
use clap::Parser;

/// Run jmetrics with the given arguments, writing output to stdout.
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run jmetrics with the given arguments, writing output to the specified
/// writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["jmetrics".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let Some(command) = cli.command else {
        // No subcommand: analyze the current directory with defaults
        let config = crate::config::Config::load();
        return crate::commands::run_analyze(
            &[],
            config,
            AnalyzeOptions::default(),
            writer,
        );
    };

    match command {
        Commands::Analyze {
            common,
            sequential,
            threads,
            no_cache,
        } => {
            let config_root = common
                .paths
                .first()
                .map_or(std::path::Path::new("."), std::path::PathBuf::as_path);
            let config = crate::config::Config::load_from_path(config_root);
            let mut exclude = config.jmetrics.exclude_folders.clone().unwrap_or_default();
            exclude.extend(common.exclude.clone());

            crate::commands::run_analyze(
                &common.paths,
                config,
                AnalyzeOptions {
                    json: common.json,
                    exclude,
                    sequential,
                    threads,
                    no_cache,
                    output_file: common.output_file,
                    verbose: common.verbose,
                },
                writer,
            )
        }
        Commands::Cc {
            common,
            rank,
            average,
            total_average,
            show_complexity,
            order,
            fail_threshold,
        } => crate::commands::run_cc(
            &common.paths,
            CcOptions {
                json: common.json,
                exclude: common.exclude,
                min_rank: rank.min_rank,
                max_rank: rank.max_rank,
                average,
                total_average,
                show_complexity,
                order,
                fail_threshold,
                output_file: common.output_file,
                verbose: common.verbose,
            },
            writer,
        ),
        Commands::Bigo { common } => {
            crate::commands::run_bigo(
                &common.paths,
                common.json,
                common.exclude,
                common.output_file,
                common.verbose,
                writer,
            )?;
            Ok(0)
        }
        Commands::Hal { common } => {
            crate::commands::run_hal(
                &common.paths,
                common.json,
                common.exclude,
                common.output_file,
                common.verbose,
                writer,
            )?;
            Ok(0)
        }
        Commands::Mi {
            common,
            show,
            average,
            fail_threshold,
        } => crate::commands::run_mi(
            &common.paths,
            MiOptions {
                json: common.json,
                exclude: common.exclude,
                show,
                average,
                fail_threshold,
                output_file: common.output_file,
                verbose: common.verbose,
            },
            writer,
        ),
        Commands::Ck { common } => {
            crate::commands::run_ck(
                &common.paths,
                common.json,
                common.exclude,
                common.output_file,
                common.verbose,
                writer,
            )?;
            Ok(0)
        }
        Commands::Init { force } => {
            crate::commands::run_init(std::path::Path::new("."), force, writer)
        }
    }
}
