//! Git-to-mercurial branch synchronization.
//!
//! Keeps the two mercurial branches in sync with the single git repo: the
//! checked-out hg branch selects which branch-variant files apply, and files
//! are only ever copied onto paths mercurial already tracks, so the tool
//! never adds new paths to the hg side.
//!
//! WARNING - changes made directly in the hg repo get overwritten. Checking
//! file timestamps would not help, as hg resets them when switching
//! branches.

use crate::config::SyncOptions;
use crate::constants::HG_SUBDIR;
use crate::hg::FileManifest;
use crate::variants::VariantMap;
use crate::{git, hg};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// One entry of the copy plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Source will be copied over a path the destination already tracks.
    Update { source: String, target: String },
    /// The resolved target is not managed in the destination.
    SkipUntracked { source: String },
}

/// A prepared synchronization run: the active hg branch and the per-file
/// actions, in execution order.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub branch: String,
    pub actions: Vec<PlanAction>,
}

impl SyncPlan {
    /// Number of files the plan will copy.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, PlanAction::Update { .. }))
            .count()
    }
}

/// Outcome of an executed plan.
#[derive(Debug, Clone, Copy)]
pub struct SyncSummary {
    pub updated: usize,
    pub dry_run: bool,
}

/// Checks that `hgdir` is an hg checkout and returns the extension's working
/// subdirectory inside it.
pub fn resolve_hg_workdir(hgdir: &Path) -> anyhow::Result<PathBuf> {
    let root = std::path::absolute(hgdir)
        .with_context(|| format!("Failed to resolve {}", hgdir.display()))?;
    if !hg::is_hg_repo(&root) {
        anyhow::bail!("the specified --hgdir is not a valid hg repo");
    }
    let workdir = root.join(HG_SUBDIR);
    if !workdir.is_dir() {
        anyhow::bail!("the specified --hgdir does not have the socialapi directory");
    }
    Ok(workdir)
}

/// Checks that `gitdir` is a git checkout and returns its absolute path.
pub fn resolve_git_root(gitdir: &Path) -> anyhow::Result<PathBuf> {
    let root = std::path::absolute(gitdir)
        .with_context(|| format!("Failed to resolve {}", gitdir.display()))?;
    if !git::is_git_repo(&root) {
        anyhow::bail!("the specified --gitdir is not a valid git repo");
    }
    Ok(root)
}

/// Builds the copy plan for the branch currently checked out in `hg_workdir`.
///
/// Queries run in order: branch name, destination manifest, source listing.
/// Any query failing aborts before a single file is touched.
pub fn prepare(gitdir: &Path, hg_workdir: &Path, opts: &SyncOptions) -> anyhow::Result<SyncPlan> {
    let branch = hg::current_branch(hg_workdir)?;
    let manifest = FileManifest::load(hg_workdir)?;
    let tracked = git::ls_files(gitdir)?;
    let resolved = VariantMap::from_tracked(&tracked).resolve_all(&branch, opts.missing)?;
    Ok(SyncPlan {
        branch,
        actions: plan_actions(resolved, &manifest),
    })
}

/// Classifies resolved `(source, target)` pairs against the destination
/// manifest.
#[must_use]
pub fn plan_actions(resolved: Vec<(String, String)>, manifest: &FileManifest) -> Vec<PlanAction> {
    resolved
        .into_iter()
        .map(|(source, target)| {
            if manifest.contains(&target) {
                PlanAction::Update { source, target }
            } else {
                PlanAction::SkipUntracked { source }
            }
        })
        .collect()
}

/// Executes the plan, copying each update from `gitdir` into `hg_workdir`.
///
/// `on_action` fires for every entry so callers can report progress; under
/// dry-run the classification and reporting are identical but nothing is
/// written.
pub fn execute<F>(
    plan: &SyncPlan,
    gitdir: &Path,
    hg_workdir: &Path,
    opts: &SyncOptions,
    on_action: F,
) -> anyhow::Result<SyncSummary>
where
    F: Fn(&PlanAction),
{
    let mut updated = 0;
    for action in &plan.actions {
        on_action(action);
        if let PlanAction::Update { source, target } = action {
            updated += 1;
            if !opts.dry_run {
                let src = gitdir.join(source);
                let dest = hg_workdir.join(target);
                std::fs::copy(&src, &dest).with_context(|| {
                    format!("Failed to copy {} -> {}", src.display(), dest.display())
                })?;
            }
        }
    }
    Ok(SyncSummary {
        updated,
        dry_run: opts.dry_run,
    })
}
