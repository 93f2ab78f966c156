//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::media::MediaType;

/// Media Utilities - Rename media files into a standard scheme
#[derive(Parser, Debug)]
#[command(name = "media-utilities")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (default: the user config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename files or directories of files
    Rename {
        /// Files or directories to rename
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Destination root for renamed files
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Force a media type instead of detecting one per file
        #[arg(short = 't', long, value_enum, value_name = "TYPE")]
        media_type: Option<MediaType>,

        /// Source tag for all inputs (e.g. cd, bandcamp, audible)
        #[arg(short, long, value_name = "TAG")]
        source: Option<String>,

        /// Show the plan without touching any file
        #[arg(long)]
        dry_run: bool,

        /// Print the plan as JSON instead of human-readable output
        #[arg(long)]
        json: bool,

        /// Number of files planned concurrently
        #[arg(long, default_value_t = 4, value_name = "N")]
        max_in_flight: usize,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Inspect and validate naming rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the built-in default configuration as TOML
    Default,

    /// Print the effective configuration as TOML
    Current,

    /// Print the config file location
    Path,
}

#[derive(Subcommand, Debug)]
pub enum RulesAction {
    /// List the effective naming rules
    List,

    /// Validate the configured rules and exit
    Check,
}
