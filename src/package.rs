//! XPI packaging for the test extension build.
//!
//! Assembles the extension from its fixed source layout: the staged tree is
//! rebuilt from scratch, the test provider fixtures are merged in, the
//! default-services patch is applied, and the result is zipped into the
//! archive the browser tests load.

use crate::cmd;
use crate::constants::{
    CHROME_MANIFEST, CONTENT_DIRS, INSTALL_RDF, PROVIDER_FIXTURES_DIR, PROVIDER_STAGE_DIR,
    PROVIDERS, SERVICES_PATCH, STAGE_DIR, TEST_DIR, XPI_NAME,
};
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum PackageStep {
    Cleaning,
    Staging { name: String },
    MergingProviders,
    ApplyingPatch,
    Compressing,
    Completed,
}

/// Builds the extension archive from the source tree at `root`.
///
/// Returns the path of the created archive. Re-running over unchanged
/// sources produces an archive with identical membership, since both the
/// stage and any previous archive are removed first. A failure partway
/// through leaves the stage behind for inspection.
pub fn build_xpi<F>(root: &Path, on_step: F) -> anyhow::Result<PathBuf>
where
    F: Fn(&PackageStep),
{
    let stage = root.join(STAGE_DIR);
    let xpi = root.join(TEST_DIR).join(XPI_NAME);

    on_step(&PackageStep::Cleaning);
    if stage.exists() {
        std::fs::remove_dir_all(&stage)
            .with_context(|| format!("Failed to remove old stage {}", stage.display()))?;
    }
    std::fs::create_dir(&stage)
        .with_context(|| format!("Failed to create stage {}", stage.display()))?;
    if xpi.exists() {
        std::fs::remove_file(&xpi)
            .with_context(|| format!("Failed to remove old archive {}", xpi.display()))?;
    }

    copy_into_stage(root, &stage, CHROME_MANIFEST, &on_step)?;
    for dir in CONTENT_DIRS {
        on_step(&PackageStep::Staging {
            name: dir.to_string(),
        });
        copy_tree(&root.join(dir), &stage.join(dir))?;
    }
    copy_into_stage(root, &stage, INSTALL_RDF, &on_step)?;

    on_step(&PackageStep::MergingProviders);
    let fixtures = root.join(TEST_DIR).join(PROVIDER_FIXTURES_DIR);
    for provider in PROVIDERS {
        copy_tree(
            &fixtures.join(provider),
            &stage.join(PROVIDER_STAGE_DIR).join(provider),
        )?;
    }

    on_step(&PackageStep::ApplyingPatch);
    apply_patch(root, &stage)?;

    on_step(&PackageStep::Compressing);
    compress(&stage, &xpi)?;

    on_step(&PackageStep::Completed);
    Ok(xpi)
}

fn copy_into_stage<F>(root: &Path, stage: &Path, name: &str, on_step: &F) -> anyhow::Result<()>
where
    F: Fn(&PackageStep),
{
    on_step(&PackageStep::Staging {
        name: name.to_string(),
    });
    std::fs::copy(root.join(name), stage.join(name))
        .with_context(|| format!("Failed to copy {name} into the stage"))?;
    Ok(())
}

/// Recursively copies the directory `src` to `dest`.
fn copy_tree(src: &Path, dest: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;
    let entries =
        std::fs::read_dir(src).with_context(|| format!("Failed to read {}", src.display()))?;
    for entry in entries {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

/// Applies the default-services patch against the staged tree.
fn apply_patch(root: &Path, stage: &Path) -> anyhow::Result<()> {
    let patch = root.join(TEST_DIR).join(SERVICES_PATCH);
    let patch = patch
        .to_str()
        .context("patch path is not valid unicode")?
        .to_string();
    cmd::run(stage, "patch", &["-p1", "-i", &patch])
        .with_context(|| format!("Failed to apply {SERVICES_PATCH}"))?;
    Ok(())
}

/// Zips the stage's top-level entries into `xpi`.
fn compress(stage: &Path, xpi: &Path) -> anyhow::Result<()> {
    let mut entries: Vec<String> = std::fs::read_dir(stage)
        .with_context(|| format!("Failed to read {}", stage.display()))?
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    entries.sort();

    let xpi = xpi
        .to_str()
        .context("archive path is not valid unicode")?
        .to_string();
    let mut args = vec!["-q", "-r", xpi.as_str()];
    args.extend(entries.iter().map(String::as_str));
    cmd::run(stage, "zip", &args).context("Failed to compress the stage")?;
    Ok(())
}
