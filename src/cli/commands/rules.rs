//! Rules command implementation.

use colored::Colorize;
use std::path::Path;

use crate::cli::args::RulesAction;
use crate::core::renderer::Renderer;
use crate::core::ruleset::RuleSet;
use crate::error::Result;
use crate::models::config::load_config;
use crate::models::media::MediaType;
use crate::models::rules::FieldRegistry;

/// Run a rules subcommand.
pub async fn rules(action: RulesAction, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let registry = FieldRegistry::with_extensions(&config.naming.fields);
    let rules = RuleSet::load(&config.naming.rules, &registry)?;

    match action {
        RulesAction::List => {
            println!("{}", "Naming rules".bold().cyan());
            println!();
            println!(
                "{}",
                format!("  {:<11} {:<10} {:<32} {}", "TYPE", "SOURCE", "NAME", "PATH").bold()
            );
            for rule in rules.rules() {
                println!(
                    "  {:<11} {:<10} {:<32} {}",
                    rule.media_type.to_string(),
                    rule.selector(),
                    rule.name_template.raw(),
                    rule.path_template.raw()
                );
            }
            println!();
            println!("{}", "Template fields".bold().cyan());
            println!();
            for media_type in MediaType::all() {
                println!(
                    "  {:<11} {}",
                    media_type.to_string(),
                    registry.fields_for(media_type).join(", ")
                );
            }
        }
        RulesAction::Check => {
            let renderer = Renderer::with_substitute(config.naming.substitute)?;
            println!("{} {} rule(s) valid", "[OK]".bold().green(), rules.len());
            println!(
                "{} substitute {:?} valid",
                "[OK]".bold().green(),
                renderer.substitute()
            );
        }
    }
    Ok(())
}
