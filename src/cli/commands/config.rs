//! Config command implementation.

use colored::Colorize;
use std::path::Path;

use crate::cli::args::ConfigAction;
use crate::error::Result;
use crate::models::config::{self, Config};

/// Run a config subcommand.
pub async fn config(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Default => {
            println!("{}", toml::to_string_pretty(&Config::default())?);
        }
        ConfigAction::Current => {
            let current = config::load_config(config_path)?;
            println!("{}", toml::to_string_pretty(&current)?);
        }
        ConfigAction::Path => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => config::config_file_path(),
            };
            if path.exists() {
                println!("{}", path.display());
            } else {
                println!(
                    "{} {}",
                    path.display(),
                    "(not present, using defaults)".yellow()
                );
            }
        }
    }
    Ok(())
}
