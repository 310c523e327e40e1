//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::check::CheckArgs;
use crate::infrastructure::logging::LogFormat;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "azstore-config")]
#[command(about = "Validate Azure Storage settings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true, env = "AZSTORE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load settings, bind them, and report the result
    Check(CheckArgs),

    /// List recognised settings keys
    Keys,
}
