//! Git command wrappers.
//!
//! This module provides a thin wrapper around the git CLI commands the sync
//! tool needs, handling command execution and error formatting.

use crate::cmd;
use crate::constants::GIT_DIR;
use anyhow::Context;
use std::path::Path;

pub fn is_git_repo(path: &Path) -> bool {
    path.join(GIT_DIR).is_dir()
}

/// Lists the paths tracked by git under `repo`, relative to it.
pub fn ls_files(repo: &Path) -> anyhow::Result<Vec<String>> {
    let stdout =
        cmd::run(repo, "git", &["ls-files", "."]).context("Failed to list git tracked files")?;
    Ok(stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
