//! Media Utilities CLI
//!
//! A command-line tool for renaming media files into a standardized naming scheme.

use clap::Parser;
use media_utilities::cli::{
    args::{Cli, Commands},
    commands::{config, rename, rules},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the appropriate command
    match cli.command {
        Commands::Rename {
            inputs,
            destination,
            media_type,
            source,
            dry_run,
            json,
            max_in_flight,
        } => {
            let options = rename::RenameOptions {
                inputs,
                destination,
                media_type,
                source,
                dry_run,
                json,
                max_in_flight,
            };
            rename::rename(options, cli.config.as_deref()).await?;
        }

        Commands::Config { action } => {
            config::config(action, cli.config.as_deref()).await?;
        }

        Commands::Rules { action } => {
            rules::rules(action, cli.config.as_deref()).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_utilities=debug")
    } else {
        EnvFilter::new("media_utilities=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
