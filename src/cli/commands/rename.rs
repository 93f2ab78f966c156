//! Rename command implementation.
//!
//! Coordinates scanning, classification, rule resolution, rendering and
//! the final filesystem moves. Rule problems abort before any file is
//! touched; per-file problems are collected and reported at the end.

use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::classifier::{Classifier, ClassifyHints};
use crate::core::renderer::Renderer;
use crate::core::ruleset::RuleSet;
use crate::core::scanner;
use crate::error::{Error, Result};
use crate::models::config::load_config;
use crate::models::media::{MediaSource, MediaType};
use crate::models::report::{FailureItem, RenameItem, RenamePlan};
use crate::models::rules::FieldRegistry;
use crate::utils::fs as fsutil;

/// Options for a rename run.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub inputs: Vec<PathBuf>,
    pub destination: Option<PathBuf>,
    pub media_type: Option<MediaType>,
    pub source: Option<String>,
    pub dry_run: bool,
    pub json: bool,
    pub max_in_flight: usize,
}

/// What planning decided for one file.
enum PlanOutcome {
    Renamed(RenameItem),
    /// Already at its target path.
    Skipped(PathBuf),
}

/// Run the rename command.
pub async fn rename(options: RenameOptions, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let destination = options
        .destination
        .clone()
        .or_else(|| config.destination.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    // Everything rule-related is validated before any file is touched.
    let registry = FieldRegistry::with_extensions(&config.naming.fields);
    let rules = Arc::new(RuleSet::load(&config.naming.rules, &registry)?);
    let renderer = Renderer::with_substitute(config.naming.substitute)?;

    let hints = ClassifyHints {
        media_type: options.media_type,
        source: options.source.as_deref().map(MediaSource::parse),
    };
    let default_source = config
        .default_source
        .as_deref()
        .map(MediaSource::parse)
        .unwrap_or(MediaSource::Unknown);
    let classifier = Classifier::new(hints, default_source);

    let scan = scanner::expand_inputs(&options.inputs)?;

    if !options.json {
        println!("{}", "[PLAN] Planning renames...".bold().cyan());
        println!();
        println!("  {} {}", "Destination:".bold(), destination.display());
        println!("  {} {}", "Files:".bold(), scan.files.len());
        if scan.skipped_unsupported > 0 {
            println!(
                "  {} {}",
                "Unsupported (skipped):".bold(),
                scan.skipped_unsupported
            );
        }
        println!();
    }

    let max_in_flight = options.max_in_flight.max(1);
    let outcomes = plan_batch(
        scan.files,
        &classifier,
        &rules,
        &renderer,
        &destination,
        max_in_flight,
    )
    .await;

    let mut plan = RenamePlan::new(destination, options.dry_run);
    for outcome in outcomes {
        match outcome {
            Ok(PlanOutcome::Renamed(item)) => plan.items.push(item),
            Ok(PlanOutcome::Skipped(path)) => plan.skipped.push(path),
            Err(failure) => plan.failures.push(failure),
        }
    }

    if !options.json {
        print_plan(&plan);
    }

    let mut applied = 0;
    if !options.dry_run {
        let (count, apply_failures) = apply_items(&plan.items, !options.json);
        applied = count;
        plan.failures.extend(apply_failures);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_summary(&plan, applied, options.dry_run);
    }

    if plan.failures.is_empty() {
        Ok(())
    } else {
        Err(Error::other(format!(
            "{} file(s) failed",
            plan.failures.len()
        )))
    }
}

/// Plan the whole batch, a bounded number of files at a time.
///
/// Results come back in input order regardless of which file finishes
/// first, so repeated runs produce identical plans.
async fn plan_batch(
    files: Vec<PathBuf>,
    classifier: &Classifier,
    rules: &Arc<RuleSet>,
    renderer: &Renderer,
    destination: &Path,
    max_in_flight: usize,
) -> Vec<std::result::Result<PlanOutcome, FailureItem>> {
    stream::iter(files)
        .map(|path| {
            let classifier = classifier.clone();
            let rules = Arc::clone(rules);
            let renderer = renderer.clone();
            let destination = destination.to_path_buf();
            async move {
                let join_path = path.clone();
                match tokio::task::spawn_blocking(move || {
                    plan_one(&classifier, &rules, &renderer, &destination, &path)
                })
                .await
                {
                    Ok(outcome) => outcome,
                    Err(e) => Err(FailureItem {
                        path: join_path,
                        reason: format!("planning task failed: {e}"),
                    }),
                }
            }
        })
        .buffered(max_in_flight)
        .collect()
        .await
}

/// Classify, resolve and render a single file.
fn plan_one(
    classifier: &Classifier,
    rules: &RuleSet,
    renderer: &Renderer,
    destination: &Path,
    path: &Path,
) -> std::result::Result<PlanOutcome, FailureItem> {
    let input = classifier.classify(path).map_err(|e| failure(path, e))?;
    let rule = rules
        .resolve(input.media_type, &input.source)
        .map_err(|e| failure(path, e))?;
    let rendered = renderer.render(&input, rule).map_err(|e| failure(path, e))?;

    let to = rendered.resolve(destination, fsutil::get_extension(path).as_deref());
    if fsutil::same_path(&to, path) {
        return Ok(PlanOutcome::Skipped(path.to_path_buf()));
    }

    Ok(PlanOutcome::Renamed(RenameItem {
        media_type: input.media_type,
        source: input.source,
        from: path.to_path_buf(),
        rendered,
        to,
    }))
}

fn failure(path: &Path, error: Error) -> FailureItem {
    FailureItem {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

/// Move planned files into place.
fn apply_items(items: &[RenameItem], show_progress: bool) -> (usize, Vec<FailureItem>) {
    let progress = if show_progress && !items.is_empty() {
        let pb = ProgressBar::new(items.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓░"),
        );
        Some(pb)
    } else {
        None
    };

    let mut applied = 0;
    let mut failures = Vec::new();
    for item in items {
        if let Some(pb) = &progress {
            pb.set_message(item.rendered.file_name.clone());
        }
        match apply_one(item) {
            Ok(()) => applied += 1,
            Err(e) => {
                tracing::warn!("Failed to rename {}: {}", item.from.display(), e);
                if let Some(pb) = &progress {
                    pb.println(format!("  {} {}: {}", "[fail]".red(), item.from.display(), e));
                }
                failures.push(failure(&item.from, e));
            }
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = &progress {
        pb.finish_with_message("Done");
    }

    (applied, failures)
}

fn apply_one(item: &RenameItem) -> Result<()> {
    if item.to.exists() {
        return Err(Error::FileAlreadyExists(item.to.display().to_string()));
    }
    fsutil::ensure_parent_dir(&item.to)?;
    fsutil::move_file(&item.from, &item.to)
}

fn print_plan(plan: &RenamePlan) {
    if plan.items.is_empty() && plan.skipped.is_empty() && plan.failures.is_empty() {
        println!("{}", "Nothing to rename.".yellow());
        return;
    }

    for item in &plan.items {
        println!(
            "  {} {}",
            format!("[{}/{}]", item.media_type, item.source).cyan(),
            item.from.display()
        );
        println!("    {} {}", "->".green(), item.to.display());
    }
    for path in &plan.skipped {
        println!(
            "  {} {}",
            "[skip]".yellow(),
            format!("{} (already in place)", path.display())
        );
    }
    for failure in &plan.failures {
        println!(
            "  {} {}",
            "[fail]".red(),
            format!("{}: {}", failure.path.display(), failure.reason)
        );
    }
    println!();
}

fn print_summary(plan: &RenamePlan, applied: usize, dry_run: bool) {
    println!("{}", "[SUMMARY]".bold().green());
    println!("  {} {}", "Planned:".bold(), plan.items.len());
    if dry_run {
        println!("  {} {}", "Applied:".bold(), "0 (dry run)");
    } else {
        println!("  {} {}", "Applied:".bold(), applied);
    }
    if !plan.skipped.is_empty() {
        println!("  {} {}", "Already in place:".bold(), plan.skipped.len());
    }
    if !plan.failures.is_empty() {
        println!(
            "  {} {}",
            "Failed:".bold(),
            plan.failures.len().to_string().red()
        );
    }
}
