//! Branch-variant filename matching.
//!
//! One or two files differ between the two mercurial branches, so the git
//! tree adopts a naming convention: a file named `basename-branch-name.ext`
//! belongs to the hg branch `name`, while any other file is branch-agnostic
//! and keeps its own name as the target. This module builds the variant map
//! from the git file listing and resolves it against the active branch.

use crate::config::MissingVariant;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Pattern recognizing `basename-branch-name.ext` source filenames.
static BRANCH_VARIANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)-branch-(.*)(\..*)$").unwrap());

/// Splits a tracked path into its canonical target name and branch tag.
///
/// Returns `None` for branch-agnostic paths.
fn match_branch_variant(name: &str) -> Option<(String, String)> {
    let captures = BRANCH_VARIANT_PATTERN.captures(name)?;
    let target = format!("{}{}", &captures[1], &captures[3]);
    Some((target, captures[2].to_string()))
}

/// The concrete sources available for one canonical target name.
#[derive(Debug, Clone, Default)]
pub struct Variant {
    by_branch: HashMap<String, String>,
    agnostic: Option<String>,
}

impl Variant {
    /// Selects the source for `branch`: the branch-tagged source if one
    /// exists, else the branch-agnostic one, else nothing.
    #[must_use]
    pub fn resolve(&self, branch: &str) -> Option<&str> {
        self.by_branch
            .get(branch)
            .map(String::as_str)
            .or(self.agnostic.as_deref())
    }
}

/// Canonical target name -> available sources, for every git-tracked path.
#[derive(Debug, Clone, Default)]
pub struct VariantMap {
    variants: BTreeMap<String, Variant>,
}

impl VariantMap {
    /// Builds the map from a git tracked-file listing.
    #[must_use]
    pub fn from_tracked(paths: &[String]) -> Self {
        let mut variants: BTreeMap<String, Variant> = BTreeMap::new();
        for path in paths {
            match match_branch_variant(path) {
                Some((target, branch)) => {
                    variants
                        .entry(target)
                        .or_default()
                        .by_branch
                        .insert(branch, path.clone());
                }
                None => {
                    variants.entry(path.clone()).or_default().agnostic = Some(path.clone());
                }
            }
        }
        Self { variants }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Resolves every target against `branch`, returning sorted
    /// `(source, target)` pairs.
    ///
    /// Targets with no source for the branch are skipped or fatal depending
    /// on `missing`.
    pub fn resolve_all(
        &self,
        branch: &str,
        missing: MissingVariant,
    ) -> anyhow::Result<Vec<(String, String)>> {
        let mut resolved = Vec::new();
        for (target, variant) in &self.variants {
            match variant.resolve(branch) {
                Some(source) => resolved.push((source.to_string(), target.clone())),
                None => {
                    if missing == MissingVariant::Fail {
                        anyhow::bail!(
                            "{} has no source for branch '{}' and no branch-agnostic version",
                            target,
                            branch
                        );
                    }
                }
            }
        }
        resolved.sort();
        Ok(resolved)
    }
}
