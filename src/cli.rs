//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for verso using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Verso - travel inspiration bookmarking API
#[derive(Parser, Debug)]
#[command(name = "verso")]
#[command(version)]
#[command(about = "Travel inspiration bookmarking API", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Generate a sample configuration file
    ConfigGen {
        /// Output path
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
