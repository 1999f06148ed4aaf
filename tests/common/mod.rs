//! Test infrastructure for socialapi-tools integration tests.

use anyhow::Result;
use socialapi_tools::cmd;
use socialapi_tools::constants::HG_SUBDIR;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// True when `tool` can be spawned. Tests depending on mercurial, patch or
/// zip skip themselves on machines that only have git.
pub fn tool_available(tool: &str) -> bool {
    std::process::Command::new(tool)
        .arg("--version")
        .output()
        .is_ok()
}

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestGitRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestGitRepo {
    /// Creates an empty repository on the master branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        cmd::run(&path, "git", &["init", "-b", "master"])?;
        cmd::run(&path, "git", &["config", "user.email", "test@example.com"])?;
        cmd::run(&path, "git", &["config", "user.name", "Test User"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Writes a file (creating parent directories) and stages it.
    pub fn add_file(&self, relative: &str, content: &str) -> Result<()> {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file, content)?;
        cmd::run(&self.path, "git", &["add", relative])?;
        Ok(())
    }

    pub fn commit_all(&self) -> Result<()> {
        cmd::run(&self.path, "git", &["commit", "-m", "Test commit"])?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A temporary mercurial repository with the extension's working
/// subdirectory, checked out on the given branch.
pub struct TestHgRepo {
    _temp_dir: TempDir,
    root: PathBuf,
    workdir: PathBuf,
}

impl TestHgRepo {
    pub fn new(branch: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();

        cmd::run(&root, "hg", &["init"])?;
        let workdir = root.join(HG_SUBDIR);
        std::fs::create_dir_all(&workdir)?;
        if branch != "default" {
            cmd::run(&root, "hg", &["branch", branch])?;
        }

        Ok(Self {
            _temp_dir: temp_dir,
            root,
            workdir,
        })
    }

    /// Writes a file under the working subdirectory and marks it tracked.
    pub fn add_tracked(&self, relative: &str, content: &str) -> Result<()> {
        let file = self.workdir.join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file, content)?;
        cmd::run(&self.workdir, "hg", &["add", relative])?;
        Ok(())
    }

    pub fn commit_all(&self) -> Result<()> {
        cmd::run(
            &self.root,
            "hg",
            &[
                "commit",
                "-m",
                "Test commit",
                "--config",
                "ui.username=Test User <test@example.com>",
            ],
        )?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

/// A throwaway extension source tree matching the layout the packager
/// expects.
pub struct ExtensionTree {
    temp_dir: TempDir,
}

impl ExtensionTree {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        std::fs::write(
            root.join("chrome.manifest"),
            "content socialdev content/\n",
        )?;
        std::fs::write(
            root.join("install.rdf"),
            "<RDF><id>socialdev@labs.mozilla.com</id></RDF>\n",
        )?;

        for (dir, file, content) in [
            ("components", "registry.js", "// component registry\n"),
            ("content", "main.js", "// browser overlay\n"),
            ("locale", "en-US.properties", "social.name=Social\n"),
            ("modules", "main.js", "// backend module\n"),
            ("skin", "social.css", ".social {}\n"),
            ("defaults", "prefs.js", "pref(\"social.dev\", true);\n"),
        ] {
            std::fs::create_dir_all(root.join(dir))?;
            std::fs::write(root.join(dir).join(file), content)?;
        }
        std::fs::write(
            root.join("modules/defaultprefs.js"),
            DEFAULT_PREFS_CONTENT,
        )?;

        let provider = root.join("test/testprovider/testprovider");
        std::fs::create_dir_all(&provider)?;
        std::fs::write(provider.join("worker.js"), "// provider worker\n")?;
        std::fs::write(
            root.join("test/testDefaultService.patch"),
            DEFAULT_SERVICE_PATCH,
        )?;

        Ok(Self { temp_dir })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

const DEFAULT_PREFS_CONTENT: &str = "\
// Default preferences for the provider whitelist.
pref(\"social.enabled\", false);
pref(\"social.provider.defaultset\", 0);
";

/// Flips `social.provider.defaultset` so the test provider is installed.
pub const DEFAULT_SERVICE_PATCH: &str = "\
--- a/modules/defaultprefs.js
+++ b/modules/defaultprefs.js
@@ -1,3 +1,3 @@
 // Default preferences for the provider whitelist.
 pref(\"social.enabled\", false);
-pref(\"social.provider.defaultset\", 0);
+pref(\"social.provider.defaultset\", 1);
";
