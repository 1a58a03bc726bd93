//! Commands module - CLI subcommand implementations.
//!
//! This module contains the implementations for all CLI subcommands,
//! organized by analysis type.

mod analyze;
mod bigo;
mod cc;
mod ck;
mod hal;
mod init;
mod mi;
mod utils;

// Re-export all public items
pub use analyze::{run_analyze, AnalyzeOptions};
pub use bigo::run_bigo;
pub use cc::{run_cc, CcOptions};
pub use ck::run_ck;
pub use hal::run_hal;
pub use init::run_init;
pub use mi::{run_mi, MiOptions};
