//! Mercurial command wrappers.
//!
//! Thin wrappers around the hg CLI, plus the tracked-file manifest built
//! from `hg status --all` output.

use crate::cmd;
use crate::constants::HG_DIR;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

pub fn is_hg_repo(path: &Path) -> bool {
    path.join(HG_DIR).is_dir()
}

/// Returns the name of the branch currently checked out in `repo`.
pub fn current_branch(repo: &Path) -> anyhow::Result<String> {
    cmd::run(repo, "hg", &["branch"]).context("Failed to get hg branch")
}

/// Every path mercurial knows about under a directory, keyed by its
/// forward-slash-normalized relative path.
///
/// The value is the hg status code for the path. Nothing consumes the status
/// yet; the manifest is used purely as a membership test so the sync tool
/// never introduces paths hg does not already track.
#[derive(Debug, Clone, Default)]
pub struct FileManifest {
    entries: HashMap<String, String>,
}

impl FileManifest {
    /// Builds the manifest for `repo` from `hg status --all .`.
    pub fn load(repo: &Path) -> anyhow::Result<Self> {
        let stdout = cmd::run(repo, "hg", &["status", "--all", "."])
            .context("Failed to list hg tracked files")?;
        Ok(Self::parse(&stdout))
    }

    /// Parses `hg status --all` output: one `<status> <path>` pair per line.
    pub fn parse(stdout: &str) -> Self {
        let entries = stdout
            .lines()
            .filter_map(|line| line.split_once(' '))
            .map(|(status, name)| (name.replace('\\', "/"), status.to_string()))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_path_to_status() {
        let manifest = FileManifest::parse("C lib/main.js\nM chrome.manifest\n? notes.txt");
        assert_eq!(manifest.len(), 3);
        assert!(manifest.contains("lib/main.js"));
        assert!(manifest.contains("chrome.manifest"));
        assert!(manifest.contains("notes.txt"));
        assert!(!manifest.contains("lib/other.js"));
    }

    #[test]
    fn test_parse_normalizes_backslash_separators() {
        let manifest = FileManifest::parse("C lib\\main.js");
        assert!(manifest.contains("lib/main.js"));
    }

    #[test]
    fn test_parse_keeps_spaces_after_the_status_column() {
        let manifest = FileManifest::parse("C skin/a file.css");
        assert!(manifest.contains("skin/a file.css"));
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let manifest = FileManifest::parse("\nnostatus\n");
        assert!(manifest.is_empty());
    }
}
