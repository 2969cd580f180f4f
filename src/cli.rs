//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Nabi content engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: nabi.toml)
    #[arg(short = 'C', long, default_value = "nabi.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan all content for both locales and report counts and problems
    Check,

    /// List published posts and case studies for a locale
    List {
        /// Locale to list ("en" or "ko")
        #[arg(short, long, default_value = "en")]
        locale: String,
    },
}
