//! Build and maintenance tooling for the social extension.
//!
//! This crate backs two standalone binaries:
//! - `build-xpi` packages the extension for the browser test harness by
//!   staging the source tree, merging in the test provider fixtures,
//!   applying the default-services patch and zipping the result.
//! - `update-hg` mirrors the git repo into whichever branch of the mercurial
//!   mirror is checked out, picking branch-specific file variants by
//!   filename convention and never adding paths hg does not already track.

pub mod cmd;
pub mod config;
pub mod constants;
pub mod git;
pub mod hg;
pub mod output;
pub mod package;
pub mod sync;
pub mod variants;
