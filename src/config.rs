//! Configuration types for CLI verbosity and options.

/// Verbosity level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Controls the verbosity level of CLI output.
    pub verbosity: Verbosity,
}

impl Config {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

/// What to do when a branch-variant file has no source for the active branch.
///
/// The sync tool historically skipped such files; whether that is correct is
/// an open question, so both behaviors are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingVariant {
    /// Leave the target out of the copy plan.
    #[default]
    Skip,
    /// Abort the run, naming the unresolvable target.
    Fail,
}

/// Options for a synchronizer run, passed explicitly to the functions that
/// need them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Classify and report, but perform no filesystem writes.
    pub dry_run: bool,
    /// Policy for targets with no source on the active branch.
    pub missing: MissingVariant,
}
