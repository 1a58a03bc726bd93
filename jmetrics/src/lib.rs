//! Core library for the jmetrics static analysis tool.
//!
//! jmetrics walks parsed Java syntax trees and produces engineering-quality
//! signals: algorithmic (Big-O) complexity estimates, McCabe cyclomatic
//! complexity, the Chidamber-Kemerer metric suite, Halstead measures and a
//! derived maintainability score, driven by a concurrent, content-hash
//! cached analysis pipeline.

// Allow common complexity warnings - these are intentional design choices
#![allow(
    clippy::type_complexity,
    clippy::too_many_arguments,
    clippy::similar_names,
    clippy::items_after_statements
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the analysis orchestrator.
/// This includes the `Analyzer` struct, the worker pool and result types.
pub mod analyzer;

/// Module containing the owned syntax tree consumed by every calculator.
pub mod syntax;

/// Module lowering the external tree-sitter CST into the owned tree.
pub mod parser;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and lookup tables.
pub mod constants;

/// Module for calculating cyclomatic complexity.
pub mod complexity;

/// Module estimating algorithmic (Big-O) complexity per method.
pub mod bigo;

/// Module computing the Chidamber-Kemerer metric suite per class.
pub mod ck;

/// Module for calculating Halstead metrics.
pub mod halstead;

/// Module defining maintainability scoring and rank helpers.
pub mod metrics;

/// Module for calculating raw code metrics (LOC, SLOC, etc.).
pub mod raw_metrics;

/// Module implementing the concurrent content-addressed result cache.
pub mod cache;

/// Module containing utility functions (file discovery, path display).
pub mod utils;

/// Module for rich CLI output formatting with colored text and progress.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the entry point logic shared by every binary surface.
pub mod entry_point;
