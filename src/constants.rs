//! Application-wide constants.
//!
//! The fixed source layout of the extension and the fixed paths inside the
//! mercurial mirror, centralized to avoid magic strings throughout the
//! codebase.

/// Git directory name used to detect repositories.
pub const GIT_DIR: &str = ".git";

/// Mercurial directory name used to detect repositories.
pub const HG_DIR: &str = ".hg";

/// The extension's working subdirectory inside the mercurial tree.
pub const HG_SUBDIR: &str = "browser/extensions/socialapi";

/// Staging directory created under the extension source root.
pub const STAGE_DIR: &str = "stage";

/// Subdirectory of the source root holding the test harness and fixtures.
pub const TEST_DIR: &str = "test";

/// Name of the packaged extension archive, written into the test directory.
pub const XPI_NAME: &str = "socialdev@labs.mozilla.com.xpi";

/// Chrome registration manifest at the source root.
pub const CHROME_MANIFEST: &str = "chrome.manifest";

/// Install descriptor at the source root.
pub const INSTALL_RDF: &str = "install.rdf";

/// Content subdirectories copied verbatim into the stage.
pub const CONTENT_DIRS: [&str; 6] = [
    "components",
    "content",
    "locale",
    "modules",
    "skin",
    "defaults",
];

/// Test-only provider fixtures merged into the stage.
pub const PROVIDERS: [&str; 1] = ["testprovider"];

/// Directory under the test directory holding the provider fixtures.
pub const PROVIDER_FIXTURES_DIR: &str = "testprovider";

/// Directory under the stage that receives the provider fixtures.
pub const PROVIDER_STAGE_DIR: &str = "testprovider";

/// Patch applied to the staged tree before compression.
pub const SERVICES_PATCH: &str = "testDefaultService.patch";

/// Progress bar tick interval in milliseconds.
/// Controls how often the spinner/bar animates.
pub const PROGRESS_TICK_MS: u64 = 80;
