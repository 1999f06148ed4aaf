//! Syncs the git repo into the checked-out branch of the mercurial mirror.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use dialoguer::Confirm;
use socialapi_tools::config::{Config, MissingVariant, SyncOptions, Verbosity};
use socialapi_tools::{output, sync};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "update-hg",
    about = "Copy files from the git repo into the checked-out hg branch",
    long_about = "Keeps the two hg branches in sync with the single git repo. \
                  One hg branch carries a subset of the git repo's files, the \
                  other (more or less) the complete set; the checked-out \
                  branch determines which files are copied. Files changed \
                  directly in the hg repo get overwritten."
)]
struct Cli {
    /// The root of the mozilla-central hg repo
    #[arg(long, value_name = "DIR")]
    hgdir: PathBuf,

    /// The root of the social git repo
    #[arg(long, value_name = "DIR")]
    gitdir: PathBuf,

    /// Overwrite without asking
    #[arg(short, long)]
    force: bool,

    /// Don't actually do anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show all the things
    #[arg(short, long)]
    verbose: bool,

    /// Only print the final summary
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Fail when a branch-variant file has no source for the active branch
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Config { verbosity }
    }

    fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
            missing: if self.strict {
                MissingVariant::Fail
            } else {
                MissingVariant::Skip
            },
        }
    }
}

/// Reports a bad path argument through the usage-error exit path.
fn usage_error(err: &anyhow::Error) -> ! {
    Cli::command()
        .error(ErrorKind::ValueValidation, format!("{err:#}"))
        .exit()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    let opts = cli.sync_options();

    let hg_workdir = sync::resolve_hg_workdir(&cli.hgdir).unwrap_or_else(|e| usage_error(&e));
    let gitdir = sync::resolve_git_root(&cli.gitdir).unwrap_or_else(|e| usage_error(&e));

    let plan = sync::prepare(&gitdir, &hg_workdir, &opts)?;
    output::print_active_branch(&plan.branch, &config);

    if !cli.dry_run && !cli.force && plan.update_count() > 0 && std::io::stdin().is_terminal() {
        let prompt = format!(
            "About to overwrite {} file(s) in {}. Continue?",
            plan.update_count(),
            hg_workdir.display()
        );
        if !Confirm::new().with_prompt(prompt).default(true).interact()? {
            println!("{}", "Aborted, nothing copied.".yellow());
            return Ok(());
        }
    }

    let progress = output::create_sync_progress(plan.update_count(), &config);
    let summary = sync::execute(&plan, &gitdir, &hg_workdir, &opts, |action| {
        progress.record(action, &config);
    })?;
    progress.finish();

    output::print_sync_summary(&summary, &config);
    Ok(())
}
