//! Progress bars, colored output, and summary formatting.
//!
//! Visual feedback for both tools: a spinner with step messages while the
//! extension is packaged, a progress bar while the copy plan executes, and
//! colored per-file and summary lines. Progress widgets only exist in normal
//! verbosity; quiet and verbose modes print plain lines instead.

use crate::config::Config;
use crate::constants::PROGRESS_TICK_MS;
use crate::package::PackageStep;
use crate::sync::{PlanAction, SyncSummary};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub fn print_working_dir(path: &Path, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "Working in:".cyan(),
        path.display().to_string().white().bold()
    )
}

/// Prints a step progress message in verbose mode.
pub fn print_package_step(config: &Config, step: &PackageStep) {
    if !config.is_verbose() {
        return;
    }
    eprintln!("  {}...", format_step_message(step).dimmed());
}

/// Spinner shown while the archive is assembled.
/// Uses `Option` to avoid allocation when progress is hidden (quiet/verbose
/// modes).
pub struct PackageProgress {
    spinner: Option<ProgressBar>,
}

impl PackageProgress {
    pub fn update(&self, step: &PackageStep) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format_step_message(step));
        }
    }

    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

/// Creates the packaging spinner.
/// Hidden in quiet or verbose mode to avoid allocation.
#[must_use]
pub fn create_package_progress(config: &Config) -> PackageProgress {
    let spinner = if config.is_quiet() || config.is_verbose() {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Some(spinner)
    };

    PackageProgress { spinner }
}

pub fn print_created(xpi: &Path, config: &Config) {
    if config.is_quiet() {
        println!("{}", xpi.display());
    } else {
        println!(
            "{} {}",
            "Created".green().bold(),
            xpi.display().to_string().white()
        );
    }
}

pub fn print_active_branch(branch: &str, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!("{} {}", "Active hg branch:".cyan(), branch.white().bold());
}

/// Progress bar over the copy plan, with per-file reporting.
pub struct SyncProgress {
    bar: Option<ProgressBar>,
}

impl SyncProgress {
    /// Reports one plan entry, keeping the bar (if any) in step.
    pub fn record(&self, action: &PlanAction, config: &Config) {
        match action {
            PlanAction::Update { source, target } => {
                if !config.is_quiet() {
                    let line = format!("{} {} -> {}", "update:".green(), source, target);
                    match &self.bar {
                        Some(bar) => bar.println(line),
                        None => println!("{line}"),
                    }
                }
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                }
            }
            PlanAction::SkipUntracked { source } => {
                if config.is_verbose() {
                    println!("{} {}", "skipped (not managed in target):".yellow(), source);
                }
            }
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Creates a progress bar sized to the number of planned copies.
/// Hidden in quiet or verbose mode, and when there is nothing to copy.
#[must_use]
pub fn create_sync_progress(total: usize, config: &Config) -> SyncProgress {
    let bar = if config.is_quiet() || config.is_verbose() || total == 0 {
        None
    } else {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} copied")
                .unwrap()
                .progress_chars("█░"),
        );
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Some(bar)
    };

    SyncProgress { bar }
}

pub fn print_sync_summary(summary: &SyncSummary, config: &Config) {
    if config.is_quiet() {
        println!("{} file(s) updated.", summary.updated);
    } else {
        println!(
            "{} {}",
            summary.updated.to_string().green().bold(),
            "file(s) updated."
        );
    }
    if summary.dry_run {
        println!(
            "{}",
            "NOTE: --dry-run/-n was specified, so nothing actually happened.".yellow()
        );
    }
}

fn format_step_message(step: &PackageStep) -> String {
    match step {
        PackageStep::Cleaning => "Cleaning old stage".to_string(),
        PackageStep::Staging { name } => format!("Staging {name}"),
        PackageStep::MergingProviders => "Merging provider fixtures".to_string(),
        PackageStep::ApplyingPatch => "Applying default-services patch".to_string(),
        PackageStep::Compressing => "Compressing the stage".to_string(),
        PackageStep::Completed => "Completed".to_string(),
    }
}
